use clap::{Parser, Subcommand};

use crate::{
    cli::{StateArgs, with_workbench},
    core::appliance::ApplianceId,
    parse::{parse_count, parse_number},
    prelude::*,
    presets::{ApplianceCategory, Environment, find_preset, presets},
    quantity::{power::Watts, time::Hours},
    tables::build_appliances_table,
    workbench::ApplianceUpdate,
};

#[derive(Parser)]
pub struct AddArgs {
    #[command(subcommand)]
    pub source: AddSource,
}

#[derive(Subcommand)]
pub enum AddSource {
    /// Pre-fill the appliance from a built-in preset.
    Preset {
        #[clap(value_enum)]
        environment: Environment,

        #[clap(value_enum)]
        category: ApplianceCategory,

        /// Preset name, case-insensitive. Run `presets` to see them all.
        name: String,
    },

    /// Add a blank appliance to fill in with `update`.
    Custom,
}

/// Field values are read permissively: anything unreadable counts as zero.
#[derive(Parser)]
pub struct UpdateArgs {
    pub id: ApplianceId,

    #[clap(long)]
    pub name: Option<String>,

    /// Number of identical units.
    #[clap(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// Power draw while running, in watts.
    #[clap(long = "active-watts", allow_hyphen_values = true)]
    pub active_power: Option<String>,

    /// Power draw while idle, in watts.
    #[clap(long = "standby-watts", allow_hyphen_values = true)]
    pub standby_power: Option<String>,

    /// Switch to daily usage and set the hours per day.
    #[clap(
        long = "hours-per-day",
        allow_hyphen_values = true,
        conflicts_with_all = ["cycle_duration", "cycles_per_week"]
    )]
    pub hours_per_day: Option<String>,

    /// Switch to cyclic usage and set the hours per cycle.
    #[clap(long = "cycle-hours", allow_hyphen_values = true)]
    pub cycle_duration: Option<String>,

    /// Switch to cyclic usage and set the number of cycles per week.
    #[clap(long = "cycles-per-week", allow_hyphen_values = true)]
    pub cycles_per_week: Option<String>,
}

impl UpdateArgs {
    fn to_update(&self) -> ApplianceUpdate {
        ApplianceUpdate::builder()
            .maybe_name(self.name.clone())
            .maybe_quantity(self.quantity.as_deref().map(parse_count))
            .maybe_active_power(self.active_power.as_deref().map(parse_number).map(Watts))
            .maybe_standby_power(self.standby_power.as_deref().map(parse_number).map(Watts))
            .maybe_hours_per_day(self.hours_per_day.as_deref().map(parse_number).map(Hours))
            .maybe_cycle_duration(self.cycle_duration.as_deref().map(parse_number).map(Hours))
            .maybe_cycles_per_week(self.cycles_per_week.as_deref().map(parse_number))
            .build()
    }
}

#[derive(Parser)]
pub struct RemoveArgs {
    pub id: ApplianceId,
}

#[instrument(skip_all)]
pub fn add(state: &StateArgs, args: &AddArgs) -> Result {
    let id = with_workbench(state, |workbench| match &args.source {
        AddSource::Preset { environment, category, name } => {
            let preset = find_preset(*environment, *category, name).with_context(|| {
                let available = presets(*environment, *category)
                    .iter()
                    .map(|preset| preset.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("no preset `{name}` for {environment}/{category}, available: [{available}]")
            })?;
            Ok(workbench.add_preset(preset))
        }
        AddSource::Custom => Ok(workbench.add_custom()),
    })?;
    info!(%id, "added");
    Ok(())
}

#[instrument(skip_all, fields(id = %args.id))]
pub fn update(state: &StateArgs, args: &UpdateArgs) -> Result {
    let appliance = with_workbench(state, |workbench| {
        workbench.update(args.id, args.to_update())?;
        Ok(workbench.get(args.id).cloned())
    })?;
    println!("{}", build_appliances_table(appliance.as_slice()));
    Ok(())
}

#[instrument(skip_all, fields(id = %args.id))]
pub fn remove(state: &StateArgs, args: &RemoveArgs) -> Result {
    let removed = with_workbench(state, |workbench| workbench.remove(args.id))?;
    info!(name = removed.name.as_str(), "removed");
    Ok(())
}
