use itertools::Itertools;

use crate::{
    core::{
        appliance::{ApplianceUsageRecord, DailyEnergy},
        projection::{DAYS_PER_MONTH, Projection},
        summary::{AggregateResult, ApplianceSummary, CostBreakdown},
        tariff::TariffConfiguration,
    },
    prelude::*,
    quantity::{
        cost::Cost,
        emissions::CarbonIntensity,
        energy::KilowattHours,
        proportions::Percentage,
        time::Hours,
    },
};

/// Estimate consumption, cost and emissions of the appliances under the tariff.
///
/// Returns [`None`] when there is nothing to show: no appliances, or a day rate that is zero
/// or unreadable. Malformed numbers have already been coerced to zero by then, so this never
/// fails and can be called on every edit.
#[instrument(level = "debug", skip_all, fields(n_appliances = appliances.len()))]
pub fn compute(
    appliances: &[ApplianceUsageRecord],
    tariff: &TariffConfiguration,
) -> Option<AggregateResult> {
    if !tariff.day_rate.is_billable() || appliances.is_empty() {
        debug!(day_rate = ?tariff.day_rate, "nothing to calculate");
        return None;
    }

    let mut total_energy = KilowattHours::ZERO;
    let mut total_energy_cost = Cost::ZERO;
    let mut entries = Vec::with_capacity(appliances.len());

    for appliance in appliances {
        let energy = appliance.daily_energy();
        let cost = daily_cost(energy, appliance, tariff);
        trace!(name = appliance.name.as_str(), ?energy, ?cost);

        total_energy += energy.total();
        total_energy_cost += cost;
        entries.push((appliance.display_name(), energy.total(), cost * DAYS_PER_MONTH));
    }

    let total_monthly_energy_cost = total_energy_cost * DAYS_PER_MONTH;
    let appliances = entries
        .into_iter()
        .map(|(name, daily_energy, monthly_cost)| ApplianceSummary {
            name,
            daily_energy,
            monthly_cost,
            share_of_total: if total_monthly_energy_cost == Cost::ZERO {
                Percentage::ZERO
            } else {
                Percentage::HUNDRED * (monthly_cost / total_monthly_energy_cost)
            },
        })
        .sorted_by(|lhs, rhs| rhs.monthly_cost.cmp(&lhs.monthly_cost))
        .collect_vec();

    let mut breakdown = CostBreakdown {
        energy_cost: total_energy_cost,
        standing_charge: tariff.standing_charge,
        vat: Cost::ZERO,
        total: Cost::ZERO,
    };
    breakdown.vat = breakdown.before_vat() * tariff.vat_rate.to_ratio();
    breakdown.total = breakdown.before_vat() + breakdown.vat;
    debug!(?total_energy, total = ?breakdown.total, "calculated");

    Some(AggregateResult {
        energy: Projection::from_daily(total_energy),
        cost: Projection::from_daily(breakdown.total),
        emissions: Projection::from_daily(total_energy * CarbonIntensity::UK_GRID),
        breakdown,
        appliances,
    })
}

/// Daily energy cost of a single appliance entry.
///
/// Under a dual-rate tariff the active hours fill the night window first, and only the rest
/// is billed at the day rate. Stand-by energy is always billed at the day rate.
fn daily_cost(
    energy: DailyEnergy,
    appliance: &ApplianceUsageRecord,
    tariff: &TariffConfiguration,
) -> Cost {
    if !tariff.has_night_window() {
        return energy.total() * tariff.day_rate;
    }
    let night_hours = energy.active_hours.min(tariff.night_hours);
    let day_hours = (energy.active_hours - tariff.night_hours).max(Hours::ZERO);
    let active_power = appliance.active_power * f64::from(appliance.quantity);
    (active_power * day_hours) * tariff.day_rate
        + (active_power * night_hours) * tariff.night_rate
        + energy.standby * tariff.day_rate
}
