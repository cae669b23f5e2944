//! Built-in appliance presets to pre-fill new entries.
//!
//! Figures are typical UK nameplate and measured draws. They only seed a new
//! [`ApplianceUsageRecord`], which the user is free to edit afterwards.

use std::fmt::{Display, Formatter};

use crate::{
    core::appliance::{ApplianceId, ApplianceUsageRecord, UsageMode},
    quantity::{power::Watts, time::Hours},
};

#[derive(Debug, Hash, clap::ValueEnum, enumset::EnumSetType)]
pub enum Environment {
    /// Homes and flats.
    Domestic,

    /// Offices, shops and other small business premises.
    Commercial,

    /// Garages, workshops and site cabins.
    Workshop,
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::Commercial => write!(f, "Commercial"),
            Self::Workshop => write!(f, "Workshop"),
        }
    }
}

#[derive(Debug, Hash, clap::ValueEnum, enumset::EnumSetType)]
pub enum ApplianceCategory {
    Kitchen,
    Laundry,
    Heating,
    Lighting,
    Entertainment,
    Office,
    Tools,
}

impl Display for ApplianceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kitchen => write!(f, "Kitchen"),
            Self::Laundry => write!(f, "Laundry"),
            Self::Heating => write!(f, "Heating"),
            Self::Lighting => write!(f, "Lighting"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Office => write!(f, "Office"),
            Self::Tools => write!(f, "Tools"),
        }
    }
}

/// Named template of default appliance parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub active_power: Watts,
    pub standby_power: Watts,
    pub usage_mode: UsageMode,
}

impl Preset {
    const fn daily(name: &'static str, active: f64, standby: f64, hours: f64) -> Self {
        Self {
            name,
            active_power: Watts(active),
            standby_power: Watts(standby),
            usage_mode: UsageMode::HoursPerDay { hours: Hours(hours) },
        }
    }

    const fn cycles(
        name: &'static str,
        active: f64,
        standby: f64,
        cycle_hours: f64,
        cycles_per_week: f64,
    ) -> Self {
        Self {
            name,
            active_power: Watts(active),
            standby_power: Watts(standby),
            usage_mode: UsageMode::CyclesPerWeek {
                cycle_duration: Hours(cycle_hours),
                cycles_per_week,
            },
        }
    }

    /// Seed a new appliance entry with the preset values.
    pub fn to_record(&self, id: ApplianceId) -> ApplianceUsageRecord {
        ApplianceUsageRecord::builder()
            .id(id)
            .name(self.name)
            .active_power(self.active_power)
            .standby_power(self.standby_power)
            .usage_mode(self.usage_mode)
            .build()
    }
}

const DOMESTIC_KITCHEN: &[Preset] = &[
    Preset::daily("Fridge freezer", 150.0, 0.0, 8.0),
    Preset::daily("Kettle", 3000.0, 0.0, 0.3),
    Preset::daily("Microwave", 1000.0, 2.0, 0.25),
    Preset::daily("Electric oven", 2500.0, 2.0, 1.0),
    Preset::daily("Induction hob", 2000.0, 1.0, 0.75),
    Preset::cycles("Dishwasher", 1200.0, 1.0, 1.5, 5.0),
    Preset::daily("Toaster", 900.0, 0.0, 0.1),
];

const DOMESTIC_LAUNDRY: &[Preset] = &[
    Preset::cycles("Washing machine", 2000.0, 1.0, 1.0, 4.0),
    Preset::cycles("Tumble dryer", 2500.0, 1.0, 1.0, 3.0),
    Preset::cycles("Heat pump dryer", 800.0, 1.0, 2.0, 3.0),
    Preset::daily("Iron", 2400.0, 0.0, 0.2),
];

const DOMESTIC_HEATING: &[Preset] = &[
    Preset::daily("Oil-filled radiator", 2000.0, 0.0, 3.0),
    Preset::daily("Fan heater", 2000.0, 0.0, 1.0),
    Preset::daily("Storage heater", 2550.0, 0.0, 7.0),
    Preset::daily("Immersion heater", 3000.0, 0.0, 2.0),
    Preset::daily("Electric shower", 9500.0, 0.0, 0.25),
    Preset::daily("Electric blanket", 100.0, 0.0, 1.0),
];

const DOMESTIC_LIGHTING: &[Preset] = &[
    Preset::daily("LED bulb", 8.0, 0.0, 5.0),
    Preset::daily("Halogen bulb", 50.0, 0.0, 5.0),
    Preset::daily("Outdoor floodlight", 30.0, 0.5, 10.0),
];

const DOMESTIC_ENTERTAINMENT: &[Preset] = &[
    Preset::daily("LED TV", 100.0, 0.5, 4.0),
    Preset::daily("Games console", 150.0, 2.0, 2.0),
    Preset::daily("Broadband router", 10.0, 0.0, 24.0),
    Preset::daily("Soundbar", 30.0, 2.0, 3.0),
];

const DOMESTIC_OFFICE: &[Preset] = &[
    Preset::daily("Laptop", 50.0, 1.0, 6.0),
    Preset::daily("Desktop PC", 200.0, 2.0, 6.0),
    Preset::daily("Monitor", 25.0, 0.3, 6.0),
    Preset::daily("Inkjet printer", 20.0, 3.0, 0.1),
];

const COMMERCIAL_KITCHEN: &[Preset] = &[
    Preset::daily("Commercial fridge", 300.0, 0.0, 12.0),
    Preset::daily("Hot water boiler", 3000.0, 50.0, 2.0),
    Preset::daily("Bean-to-cup coffee machine", 2200.0, 30.0, 2.0),
    Preset::cycles("Pass-through dishwasher", 7000.0, 10.0, 0.5, 30.0),
];

const COMMERCIAL_HEATING: &[Preset] = &[
    Preset::daily("Air conditioning unit", 3500.0, 5.0, 6.0),
    Preset::daily("Panel heater", 1500.0, 0.0, 8.0),
    Preset::daily("Hand dryer", 1400.0, 1.0, 0.5),
];

const COMMERCIAL_LIGHTING: &[Preset] = &[
    Preset::daily("LED panel 600×600", 36.0, 0.0, 10.0),
    Preset::daily("T8 fluorescent tube", 58.0, 0.0, 10.0),
    Preset::daily("Emergency luminaire", 3.0, 0.0, 24.0),
];

const COMMERCIAL_OFFICE: &[Preset] = &[
    Preset::daily("Desktop PC", 200.0, 2.0, 8.0),
    Preset::daily("Laser printer", 600.0, 10.0, 1.0),
    Preset::daily("Network switch", 40.0, 0.0, 24.0),
    Preset::daily("Server", 350.0, 0.0, 24.0),
];

const WORKSHOP_HEATING: &[Preset] = &[
    Preset::daily("Infrared heater", 3000.0, 0.0, 4.0),
    Preset::daily("Fan heater", 3000.0, 0.0, 3.0),
];

const WORKSHOP_LIGHTING: &[Preset] = &[
    Preset::daily("LED batten", 40.0, 0.0, 8.0),
    Preset::daily("Site floodlight", 100.0, 0.0, 8.0),
];

const WORKSHOP_TOOLS: &[Preset] = &[
    Preset::daily("Air compressor", 2200.0, 0.0, 1.0),
    Preset::daily("Mitre saw", 1800.0, 0.0, 0.5),
    Preset::daily("Bench grinder", 400.0, 0.0, 0.5),
    Preset::daily("Cordless tool charger", 60.0, 1.0, 2.0),
    Preset::daily("MIG welder", 5000.0, 0.0, 0.5),
];

/// Presets for the environment and category, possibly none.
#[must_use]
pub const fn presets(environment: Environment, category: ApplianceCategory) -> &'static [Preset] {
    match (environment, category) {
        (Environment::Domestic, ApplianceCategory::Kitchen) => DOMESTIC_KITCHEN,
        (Environment::Domestic, ApplianceCategory::Laundry) => DOMESTIC_LAUNDRY,
        (Environment::Domestic, ApplianceCategory::Heating) => DOMESTIC_HEATING,
        (Environment::Domestic, ApplianceCategory::Lighting) => DOMESTIC_LIGHTING,
        (Environment::Domestic, ApplianceCategory::Entertainment) => DOMESTIC_ENTERTAINMENT,
        (Environment::Domestic, ApplianceCategory::Office) => DOMESTIC_OFFICE,
        (Environment::Commercial, ApplianceCategory::Kitchen) => COMMERCIAL_KITCHEN,
        (Environment::Commercial, ApplianceCategory::Heating) => COMMERCIAL_HEATING,
        (Environment::Commercial, ApplianceCategory::Lighting) => COMMERCIAL_LIGHTING,
        (Environment::Commercial, ApplianceCategory::Office) => COMMERCIAL_OFFICE,
        (Environment::Workshop, ApplianceCategory::Heating) => WORKSHOP_HEATING,
        (Environment::Workshop, ApplianceCategory::Lighting) => WORKSHOP_LIGHTING,
        (Environment::Workshop, ApplianceCategory::Tools) => WORKSHOP_TOOLS,
        _ => &[],
    }
}

/// Look a preset up by its name, ignoring the case.
#[must_use]
pub fn find_preset(
    environment: Environment,
    category: ApplianceCategory,
    name: &str,
) -> Option<&'static Preset> {
    presets(environment, category).iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_lookup() {
        let kitchen = presets(Environment::Domestic, ApplianceCategory::Kitchen);
        assert!(kitchen.iter().any(|preset| preset.name == "Kettle"));
    }

    #[test]
    fn test_empty_combination() {
        assert!(presets(Environment::Workshop, ApplianceCategory::Entertainment).is_empty());
    }

    #[test]
    fn test_find_preset_ignores_case() {
        let preset =
            find_preset(Environment::Domestic, ApplianceCategory::Laundry, "washing MACHINE")
                .unwrap();
        assert_eq!(
            preset.usage_mode,
            UsageMode::CyclesPerWeek { cycle_duration: Hours(1.0), cycles_per_week: 4.0 }
        );
        assert!(find_preset(Environment::Domestic, ApplianceCategory::Laundry, "Kettle").is_none());
    }

    #[test]
    fn test_names_are_unique_within_group() {
        for environment in EnumSet::<Environment>::all() {
            for category in EnumSet::<ApplianceCategory>::all() {
                let group = presets(environment, category);
                for (index, preset) in group.iter().enumerate() {
                    assert!(
                        group[index + 1..].iter().all(|other| other.name != preset.name),
                        "duplicate {} in {environment}/{category}",
                        preset.name,
                    );
                }
            }
        }
    }

    #[test]
    fn test_to_record() {
        let preset = find_preset(Environment::Domestic, ApplianceCategory::Kitchen, "Kettle").unwrap();
        let record = preset.to_record(ApplianceId(7));
        assert_eq!(record.id, ApplianceId(7));
        assert_eq!(record.name, "Kettle");
        assert_eq!(record.quantity, 1);
        assert_eq!(record.active_power, Watts(3000.0));
    }
}
