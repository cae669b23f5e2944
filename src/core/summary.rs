use serde::{Deserialize, Serialize};

use crate::{
    core::projection::Projection,
    quantity::{
        cost::Cost,
        emissions::KilogramsCo2,
        energy::KilowattHours,
        proportions::Percentage,
    },
};

/// Everything the calculator shows for one set of appliances and one tariff.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub energy: Projection<KilowattHours>,

    /// Including the standing charge and VAT.
    pub cost: Projection<Cost>,

    pub emissions: Projection<KilogramsCo2>,

    pub breakdown: CostBreakdown,

    /// Sorted by the monthly cost, most expensive first.
    pub appliances: Vec<ApplianceSummary>,
}

/// Daily bill split into its components.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub energy_cost: Cost,
    pub standing_charge: Cost,
    pub vat: Cost,
    pub total: Cost,
}

impl CostBreakdown {
    pub fn before_vat(&self) -> Cost {
        self.energy_cost + self.standing_charge
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSummary {
    pub name: String,
    pub daily_energy: KilowattHours,

    /// Energy cost only, without the standing charge and VAT.
    pub monthly_cost: Cost,

    /// Share of the total monthly energy cost.
    pub share_of_total: Percentage,
}
