use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{cost::Cost, energy::KilowattHours};

/// Pound sterling per kilowatt-hour.
#[derive(Copy, Clone, Default, PartialEq, derive_more::From, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct KilowattHourRate(pub f64);

implement_mul!(KilowattHours, KilowattHourRate, Cost);

impl KilowattHourRate {
    /// Zero or non-finite unit rate cannot price anything.
    pub fn is_billable(self) -> bool {
        self.0.is_finite() && self.0 != 0.0
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{:.3}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{:?}/kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_energy_times_rate() {
        let cost = KilowattHours(4.0) * KilowattHourRate(0.30);
        assert_abs_diff_eq!(cost.0, 1.2);
    }

    #[test]
    fn test_is_billable() {
        assert!(KilowattHourRate(0.30).is_billable());
        assert!(!KilowattHourRate(0.0).is_billable());
        assert!(!KilowattHourRate(f64::NAN).is_billable());
    }
}
