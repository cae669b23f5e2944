use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        appliance::ApplianceUsageRecord,
        summary::AggregateResult,
        tariff::{TariffConfiguration, TariffForm},
    },
    presets::{ApplianceCategory, Environment, Preset},
    quantity::cost::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_totals_table(result: &AggregateResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Energy", "Cost", "CO₂"]);
    for (period, energy, cost, emissions) in [
        ("Daily", result.energy.daily, result.cost.daily, result.emissions.daily),
        ("Weekly", result.energy.weekly, result.cost.weekly, result.emissions.weekly),
        ("Monthly", result.energy.monthly, result.cost.monthly, result.emissions.monthly),
        ("Yearly", result.energy.yearly, result.cost.yearly, result.emissions.yearly),
    ] {
        table.add_row(vec![
            Cell::new(period),
            Cell::new(energy).set_alignment(CellAlignment::Right),
            Cell::new(cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
            Cell::new(emissions).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_breakdown_table(result: &AggregateResult) -> Table {
    let breakdown = &result.breakdown;
    let mut table = new_table();
    table.set_header(vec!["Daily", "Cost"]);
    for (label, cost) in [
        ("Energy", breakdown.energy_cost),
        ("Standing charge", breakdown.standing_charge),
        ("Before VAT", breakdown.before_vat()),
        ("VAT", breakdown.vat),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(cost).set_alignment(CellAlignment::Right)]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(breakdown.total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_appliance_summary_table(result: &AggregateResult) -> Table {
    #[expect(clippy::cast_precision_loss)]
    let mean_cost = if result.appliances.is_empty() {
        Cost::ZERO
    } else {
        result.appliances.iter().map(|summary| summary.monthly_cost).sum::<Cost>()
            / result.appliances.len() as f64
    };

    let mut table = new_table();
    table.set_header(vec!["Appliance", "Daily energy", "Monthly cost", "Share"]);
    for summary in &result.appliances {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(summary.daily_energy).set_alignment(CellAlignment::Right),
            Cell::new(summary.monthly_cost).set_alignment(CellAlignment::Right).fg(
                if summary.monthly_cost > mean_cost { Color::Red } else { Color::Green },
            ),
            Cell::new(summary.share_of_total)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_appliances_table(appliances: &[ApplianceUsageRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Units", "Active", "Stand-by", "Usage"]);
    for appliance in appliances {
        table.add_row(vec![
            Cell::new(appliance.id).add_attribute(Attribute::Dim),
            Cell::new(&appliance.name),
            Cell::new(appliance.quantity).set_alignment(CellAlignment::Right),
            Cell::new(appliance.active_power).set_alignment(CellAlignment::Right),
            Cell::new(appliance.standby_power).set_alignment(CellAlignment::Right),
            Cell::new(appliance.usage_mode),
        ]);
    }
    table
}

pub fn build_tariff_table(form: &TariffForm) -> Table {
    let tariff = form.parse();
    let dimmed = |enabled: bool| if enabled { Attribute::NormalIntensity } else { Attribute::Dim };

    let mut table = new_table();
    table.set_header(vec!["Setting", "Entered", "Used"]);
    table.add_row(vec![
        Cell::new("Day rate"),
        Cell::new(&form.day_rate),
        Cell::new(tariff.day_rate).fg(if tariff.day_rate.is_billable() {
            Color::Reset
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![
        Cell::new("Night rate").add_attribute(dimmed(tariff.has_night_window())),
        Cell::new(&form.night_rate),
        Cell::new(tariff.night_rate),
    ]);
    table.add_row(vec![
        Cell::new("Night hours").add_attribute(dimmed(tariff.has_night_window())),
        Cell::new(&form.night_hours),
        Cell::new(tariff.night_hours),
    ]);
    table.add_row(vec![
        Cell::new("Standing charge"),
        Cell::new(&form.standing_charge),
        Cell::new(format!("{}/day", tariff.standing_charge)),
    ]);
    table.add_row(vec![Cell::new("VAT"), Cell::new(&form.vat_rate), Cell::new(tariff.vat_rate)]);
    table.add_row(vec![
        Cell::new("Dual rate"),
        Cell::new(form.dual_rate),
        Cell::new(billing_label(&tariff)),
    ]);
    table
}

fn billing_label(tariff: &TariffConfiguration) -> &'static str {
    match (tariff.dual_rate, tariff.has_night_window()) {
        (true, true) => "day/night",
        (true, false) => "flat (no night window)",
        (false, _) => "flat",
    }
}

pub fn build_presets_table(
    presets: impl IntoIterator<Item = (Environment, ApplianceCategory, &'static Preset)>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Environment", "Category", "Name", "Active", "Stand-by", "Usage"]);
    for (environment, category, preset) in presets {
        table.add_row(vec![
            Cell::new(environment).add_attribute(Attribute::Dim),
            Cell::new(category).add_attribute(Attribute::Dim),
            Cell::new(preset.name),
            Cell::new(preset.active_power).set_alignment(CellAlignment::Right),
            Cell::new(preset.standby_power).set_alignment(CellAlignment::Right),
            Cell::new(preset.usage_mode),
        ]);
    }
    table
}
