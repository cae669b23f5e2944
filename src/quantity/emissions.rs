use std::fmt::{Display, Formatter};

use crate::quantity::energy::KilowattHours;

quantity!(
    /// Kilograms of carbon dioxide.
    KilogramsCo2, via: f64, suffix: "kg CO₂", precision: 2
);

/// Kilograms of CO₂ emitted per kilowatt-hour drawn from the grid.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CarbonIntensity(pub f64);

impl CarbonIntensity {
    /// Fixed UK grid intensity factor.
    pub const UK_GRID: Self = Self(0.233);
}

impl Display for CarbonIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg CO₂/kWh", self.0)
    }
}

implement_mul!(KilowattHours, CarbonIntensity, KilogramsCo2);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_uk_grid_emissions() {
        assert_abs_diff_eq!((KilowattHours(10.0) * CarbonIntensity::UK_GRID).0, 2.33);
    }
}
