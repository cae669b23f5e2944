use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Average number of days in a calendar month.
pub const DAYS_PER_MONTH: f64 = 30.44;

pub const DAYS_PER_WEEK: f64 = 7.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// A daily figure scaled flat onto longer periods, ignoring the calendar.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection<T> {
    pub daily: T,
    pub weekly: T,
    pub monthly: T,
    pub yearly: T,
}

impl<T> Projection<T>
where
    T: Copy + Mul<f64, Output = T>,
{
    pub fn from_daily(daily: T) -> Self {
        Self {
            daily,
            weekly: daily * DAYS_PER_WEEK,
            monthly: daily * DAYS_PER_MONTH,
            yearly: daily * DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::cost::Cost;

    #[test]
    fn test_from_daily() {
        let projection = Projection::from_daily(Cost(1.26));
        assert_eq!(projection.daily, Cost(1.26));
        assert_eq!(projection.weekly, Cost(1.26 * 7.0));
        assert_eq!(projection.monthly, Cost(1.26 * 30.44));
        assert_eq!(projection.yearly, Cost(1.26 * 365.0));
    }
}
