use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Watts, via: f64, suffix: "W", precision: 0);

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours(self.0 * hours.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_watts_times_hours() {
        assert_abs_diff_eq!((Watts(2000.0) * Hours(2.0)).0, 4.0);
        assert_abs_diff_eq!((Watts(5.0) * Hours(22.0)).0, 0.11);
    }

    #[test]
    fn test_watts_times_hours_is_exact() {
        assert_eq!((Watts(9500.0) * Hours(0.1)).0, 0.95);
        assert_eq!((Watts(2300.0) * Hours(0.3)).0, 0.69);
    }
}
