use bon::Builder;

use crate::{
    core::{
        aggregator::compute,
        appliance::{ApplianceId, ApplianceUsageRecord, UsageMode},
        summary::AggregateResult,
        tariff::TariffForm,
    },
    prelude::*,
    presets::Preset,
    quantity::{power::Watts, time::Hours},
    storage::Storage,
};

/// The user's appliance list together with the tariff they entered.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbench {
    pub appliances: Vec<ApplianceUsageRecord>,
    pub tariff: TariffForm,

    /// Last identifier handed out, so that removed identifiers are never reused.
    pub last_id: Option<ApplianceId>,
}

/// Field-level edit of an appliance entry. Unset fields stay as they are.
#[must_use]
#[derive(Clone, Debug, Default, Builder)]
pub struct ApplianceUpdate {
    #[builder(into)]
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub active_power: Option<Watts>,
    pub standby_power: Option<Watts>,

    /// Switches the entry to the hours-per-day mode.
    pub hours_per_day: Option<Hours>,

    /// Switches the entry to the cycles-per-week mode.
    pub cycle_duration: Option<Hours>,

    /// Switches the entry to the cycles-per-week mode.
    pub cycles_per_week: Option<f64>,
}

impl ApplianceUpdate {
    fn apply(self, record: &mut ApplianceUsageRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(active_power) = self.active_power {
            record.active_power = active_power;
        }
        if let Some(standby_power) = self.standby_power {
            record.standby_power = standby_power;
        }
        if let Some(hours) = self.hours_per_day {
            record.usage_mode = UsageMode::HoursPerDay { hours };
        }
        if self.cycle_duration.is_some() || self.cycles_per_week.is_some() {
            let (cycle_duration, cycles_per_week) = match record.usage_mode {
                UsageMode::CyclesPerWeek { cycle_duration, cycles_per_week } => {
                    (cycle_duration, cycles_per_week)
                }
                UsageMode::HoursPerDay { .. } => (Hours::ZERO, 0.0),
            };
            record.usage_mode = UsageMode::CyclesPerWeek {
                cycle_duration: self.cycle_duration.unwrap_or(cycle_duration),
                cycles_per_week: self.cycles_per_week.unwrap_or(cycles_per_week),
            };
        }
    }
}

impl Workbench {
    pub const CUSTOM_APPLIANCE_NAME: &'static str = "Custom appliance";

    /// Restore the state saved under the namespace, falling back to the defaults.
    #[instrument(skip_all, fields(namespace = namespace))]
    pub fn restore(storage: &impl Storage, namespace: &str) -> Result<Self> {
        let appliances: Vec<ApplianceUsageRecord> =
            storage.load(&appliances_key(namespace))?.unwrap_or_default();
        let tariff: TariffForm = storage.load(&tariff_key(namespace))?.unwrap_or_default();
        let last_id = storage.load::<Option<ApplianceId>>(&last_id_key(namespace))?.flatten();
        let this = Self { appliances, tariff, last_id };
        debug!(n_appliances = this.appliances.len(), "restored");
        Ok(this)
    }

    #[instrument(skip_all, fields(namespace = namespace))]
    pub fn persist(&self, storage: &mut impl Storage, namespace: &str) -> Result {
        storage.save(&appliances_key(namespace), &self.appliances)?;
        storage.save(&tariff_key(namespace), &self.tariff)?;
        storage.save(&last_id_key(namespace), &self.last_id)?;
        debug!(n_appliances = self.appliances.len(), "persisted");
        Ok(())
    }

    fn next_id(&mut self) -> ApplianceId {
        let id = self
            .appliances
            .iter()
            .map(|appliance| appliance.id)
            .chain(self.last_id)
            .max()
            .map_or(ApplianceId::FIRST, ApplianceId::next);
        self.last_id = Some(id);
        id
    }

    pub fn add_preset(&mut self, preset: &Preset) -> ApplianceId {
        let id = self.next_id();
        self.appliances.push(preset.to_record(id));
        id
    }

    /// Add a blank entry for the user to fill in.
    pub fn add_custom(&mut self) -> ApplianceId {
        let id = self.next_id();
        self.appliances
            .push(ApplianceUsageRecord::builder().id(id).name(Self::CUSTOM_APPLIANCE_NAME).build());
        id
    }

    #[must_use]
    pub fn get(&self, id: ApplianceId) -> Option<&ApplianceUsageRecord> {
        self.appliances.iter().find(|appliance| appliance.id == id)
    }

    pub fn update(&mut self, id: ApplianceId, update: ApplianceUpdate) -> Result {
        let record = self
            .appliances
            .iter_mut()
            .find(|appliance| appliance.id == id)
            .with_context(|| format!("there is no appliance #{id}"))?;
        update.apply(record);
        Ok(())
    }

    pub fn remove(&mut self, id: ApplianceId) -> Result<ApplianceUsageRecord> {
        let index = self
            .appliances
            .iter()
            .position(|appliance| appliance.id == id)
            .with_context(|| format!("there is no appliance #{id}"))?;
        Ok(self.appliances.remove(index))
    }

    /// Discard all the appliances and restore the default tariff.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn calculate(&self) -> Option<AggregateResult> {
        compute(&self.appliances, &self.tariff.parse())
    }
}

fn appliances_key(namespace: &str) -> String {
    format!("{namespace}.appliances")
}

fn tariff_key(namespace: &str) -> String {
    format!("{namespace}.tariff")
}

fn last_id_key(namespace: &str) -> String {
    format!("{namespace}.last-id")
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        presets::{ApplianceCategory, Environment, find_preset},
        storage::MemoryStorage,
    };

    fn kettle() -> &'static Preset {
        find_preset(Environment::Domestic, ApplianceCategory::Kitchen, "Kettle").unwrap()
    }

    #[test]
    fn test_ids_are_creation_ordered() -> Result {
        let mut workbench = Workbench::default();
        assert_eq!(workbench.add_preset(kettle()), ApplianceId(1));
        assert_eq!(workbench.add_custom(), ApplianceId(2));
        workbench.remove(ApplianceId(1))?;
        assert_eq!(workbench.add_custom(), ApplianceId(3));
        Ok(())
    }

    #[test]
    fn test_removed_ids_are_not_reused() -> Result {
        let mut storage = MemoryStorage::new();
        let mut workbench = Workbench::default();
        workbench.add_custom();
        let newest = workbench.add_custom();
        workbench.remove(newest)?;
        workbench.persist(&mut storage, "test")?;

        let mut workbench = Workbench::restore(&storage, "test")?;
        assert_eq!(workbench.add_custom(), ApplianceId(3));
        workbench.remove(ApplianceId(3))?;
        workbench.remove(ApplianceId(1))?;
        assert_eq!(workbench.add_custom(), ApplianceId(4));
        Ok(())
    }

    #[test]
    fn test_add_custom_is_blank() {
        let mut workbench = Workbench::default();
        let id = workbench.add_custom();
        let record = workbench.get(id).unwrap();
        assert_eq!(record.name, Workbench::CUSTOM_APPLIANCE_NAME);
        assert_eq!(record.quantity, 1);
        assert_eq!(record.active_power, Watts::ZERO);
        assert_eq!(record.usage_mode, UsageMode::HoursPerDay { hours: Hours::ZERO });
    }

    #[test]
    fn test_update_fields() -> Result {
        let mut workbench = Workbench::default();
        let id = workbench.add_preset(kettle());
        workbench.update(
            id,
            ApplianceUpdate::builder()
                .name("Office kettle")
                .quantity(2)
                .hours_per_day(Hours(1.0))
                .build(),
        )?;
        let record = workbench.get(id).unwrap();
        assert_eq!(record.name, "Office kettle");
        assert_eq!(record.quantity, 2);
        assert_eq!(record.active_power, Watts(3000.0));
        assert_eq!(record.usage_mode, UsageMode::HoursPerDay { hours: Hours(1.0) });
        Ok(())
    }

    #[test]
    fn test_update_switches_to_cycles() -> Result {
        let mut workbench = Workbench::default();
        let id = workbench.add_custom();
        workbench.update(id, ApplianceUpdate::builder().cycles_per_week(3.0).build())?;
        assert_eq!(
            workbench.get(id).unwrap().usage_mode,
            UsageMode::CyclesPerWeek { cycle_duration: Hours::ZERO, cycles_per_week: 3.0 },
        );
        workbench.update(id, ApplianceUpdate::builder().cycle_duration(Hours(2.0)).build())?;
        assert_eq!(
            workbench.get(id).unwrap().usage_mode,
            UsageMode::CyclesPerWeek { cycle_duration: Hours(2.0), cycles_per_week: 3.0 },
        );
        Ok(())
    }

    #[test]
    fn test_unknown_id() {
        let mut workbench = Workbench::default();
        assert!(workbench.update(ApplianceId(42), ApplianceUpdate::default()).is_err());
        assert!(workbench.remove(ApplianceId(42)).is_err());
    }

    #[test]
    fn test_reset() {
        let mut workbench = Workbench::default();
        workbench.add_preset(kettle());
        workbench.tariff.dual_rate = true;
        workbench.reset();
        assert!(workbench.appliances.is_empty());
        assert_eq!(workbench.add_custom(), ApplianceId::FIRST);
        assert_eq!(workbench.tariff, TariffForm::default());
    }

    #[test]
    fn test_persist_and_restore() -> Result {
        let mut storage = MemoryStorage::new();
        let mut workbench = Workbench::default();
        workbench.add_preset(kettle());
        workbench.tariff.day_rate = "0.245".to_owned();
        workbench.persist(&mut storage, "test")?;

        assert!(storage.raw("test.appliances").is_some());
        assert_eq!(Workbench::restore(&storage, "test")?, workbench);
        assert_eq!(Workbench::restore(&storage, "other")?, Workbench::default());
        Ok(())
    }

    #[test]
    fn test_calculate() {
        let mut workbench = Workbench::default();
        assert!(workbench.calculate().is_none());

        workbench.add_preset(kettle());
        let result = workbench.calculate().unwrap();
        assert_abs_diff_eq!(result.energy.daily.0, 0.9, epsilon = 1e-12);

        workbench.tariff.day_rate = "free".to_owned();
        assert!(workbench.calculate().is_none());
    }
}
