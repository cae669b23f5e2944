use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{energy::KilowattHours, power::Watts, time::Hours};

/// Stable, creation-ordered identifier of an appliance on the user's list.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ApplianceId(pub u64);

impl ApplianceId {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// How an appliance is used over a typical period.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum UsageMode {
    /// Runs for a number of hours every day, for example a fridge or a light.
    HoursPerDay { hours: Hours },

    /// Runs in discrete cycles, for example a washing machine or a dishwasher.
    CyclesPerWeek { cycle_duration: Hours, cycles_per_week: f64 },
}

impl Default for UsageMode {
    fn default() -> Self {
        Self::HoursPerDay { hours: Hours::ZERO }
    }
}

impl UsageMode {
    /// Average active hours per day.
    ///
    /// Weekly cycle time is spread evenly across the seven days. The result is not clamped,
    /// so a cycle plan that implies more than a full day of activity yields more than 24 hours.
    #[must_use]
    pub fn hours_per_day(self) -> Hours {
        match self {
            Self::HoursPerDay { hours } => hours,
            Self::CyclesPerWeek { cycle_duration, cycles_per_week } => {
                cycle_duration * cycles_per_week / 7.0
            }
        }
    }
}

impl Display for UsageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoursPerDay { hours } => write!(f, "{hours}/day"),
            Self::CyclesPerWeek { cycle_duration, cycles_per_week } => {
                write!(f, "{cycles_per_week}× {cycle_duration}/week")
            }
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct ApplianceUsageRecord {
    pub id: ApplianceId,

    #[builder(into)]
    pub name: String,

    /// Number of identical units.
    #[builder(default = 1)]
    #[serde(default = "ApplianceUsageRecord::default_quantity")]
    pub quantity: u32,

    /// Draw while running.
    #[builder(default)]
    #[serde(default)]
    pub active_power: Watts,

    /// Draw while idle for the rest of the day.
    #[builder(default)]
    #[serde(default)]
    pub standby_power: Watts,

    #[builder(default)]
    #[serde(flatten)]
    pub usage_mode: UsageMode,
}

impl ApplianceUsageRecord {
    const fn default_quantity() -> u32 {
        1
    }

    /// Label shown in the breakdown, with a `×N` suffix for multiple units.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.quantity > 1 { format!("{} ×{}", self.name, self.quantity) } else { self.name.clone() }
    }

    /// Daily active and stand-by energy of all the units together.
    ///
    /// Stand-by covers the rest of the 24-hour day, so it goes negative when the active hours
    /// exceed a day.
    #[must_use]
    pub fn daily_energy(&self) -> DailyEnergy {
        let hours_per_day = self.usage_mode.hours_per_day();
        let units = f64::from(self.quantity);
        DailyEnergy {
            active_hours: hours_per_day,
            active: self.active_power * units * hours_per_day,
            standby: self.standby_power * units * (Hours::ONE_DAY - hours_per_day),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DailyEnergy {
    pub active_hours: Hours,
    pub active: KilowattHours,
    pub standby: KilowattHours,
}

impl DailyEnergy {
    pub fn total(self) -> KilowattHours {
        self.active + self.standby
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cycles_per_week_average() {
        let mode = UsageMode::CyclesPerWeek { cycle_duration: Hours(1.5), cycles_per_week: 4.0 };
        assert_abs_diff_eq!(mode.hours_per_day().0, 6.0 / 7.0);
    }

    #[test]
    fn test_display_name() {
        let record = ApplianceUsageRecord::builder().id(ApplianceId(1)).name("Kettle").build();
        assert_eq!(record.display_name(), "Kettle");

        let record =
            ApplianceUsageRecord::builder().id(ApplianceId(2)).name("LED bulb").quantity(6).build();
        assert_eq!(record.display_name(), "LED bulb ×6");
    }

    #[test]
    fn test_daily_energy() {
        let record = ApplianceUsageRecord::builder()
            .id(ApplianceId(1))
            .name("TV")
            .quantity(2)
            .active_power(Watts(100.0))
            .standby_power(Watts(1.0))
            .usage_mode(UsageMode::HoursPerDay { hours: Hours(4.0) })
            .build();
        let energy = record.daily_energy();
        assert_abs_diff_eq!(energy.active.0, 0.8);
        assert_abs_diff_eq!(energy.standby.0, 0.04);
        assert_abs_diff_eq!(energy.total().0, 0.84);
    }

    #[test]
    fn test_more_than_a_day_drives_standby_negative() {
        let record = ApplianceUsageRecord::builder()
            .id(ApplianceId(1))
            .name("Overcommitted")
            .active_power(Watts(1000.0))
            .standby_power(Watts(10.0))
            .usage_mode(UsageMode::CyclesPerWeek {
                cycle_duration: Hours(5.0),
                cycles_per_week: 42.0,
            })
            .build();
        let energy = record.daily_energy();
        assert_abs_diff_eq!(energy.active_hours.0, 30.0);
        assert_abs_diff_eq!(energy.standby.0, -0.06);
        assert_abs_diff_eq!(energy.total().0, 29.94);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let record: ApplianceUsageRecord =
            serde_json::from_str(r#"{"id": 3, "name": "Blank", "mode": "hours-per-day", "hours": 2.0}"#)
                .unwrap();
        assert_eq!(record.quantity, 1);
        assert_eq!(record.active_power, Watts::ZERO);
        assert_eq!(record.usage_mode, UsageMode::HoursPerDay { hours: Hours(2.0) });
    }
}
