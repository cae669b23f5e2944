mod appliance;
mod calculate;
mod presets;
mod tariff;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    appliance::{AddArgs, RemoveArgs, UpdateArgs, add, remove, update},
    calculate::{CalculateArgs, calculate},
    presets::{PresetsArgs, list_presets},
    tariff::{TariffArgs, tariff},
};
use crate::{
    prelude::*,
    storage::FileStorage,
    tables::build_appliances_table,
    workbench::Workbench,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub state: StateArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the energy use, cost and emissions of the appliances.
    #[clap(name = "calculate", alias = "calc")]
    Calculate(CalculateArgs),

    /// Show the appliance list.
    #[clap(name = "list", alias = "ls")]
    List,

    /// Add an appliance from a preset or a blank one.
    #[clap(name = "add")]
    Add(AddArgs),

    /// Edit fields of an appliance.
    #[clap(name = "update")]
    Update(Box<UpdateArgs>),

    /// Remove an appliance.
    #[clap(name = "remove", alias = "rm")]
    Remove(RemoveArgs),

    /// Show or edit the tariff.
    #[clap(name = "tariff")]
    Tariff(TariffArgs),

    /// Browse the built-in appliance presets.
    #[clap(name = "presets")]
    Presets(PresetsArgs),

    /// Discard all the appliances and restore the default tariff.
    #[clap(name = "reset")]
    Reset,
}

#[derive(Parser)]
pub struct StateArgs {
    /// Directory to keep the appliance list and the tariff in.
    ///
    /// Defaults to the user data directory.
    #[clap(long = "state-dir", env = "ENERGY_COST_STATE_DIR")]
    pub directory: Option<PathBuf>,

    /// Prefix of the stored keys, allows keeping several independent setups.
    #[clap(long, env = "ENERGY_COST_NAMESPACE", default_value = "energy-cost")]
    pub namespace: String,
}

impl StateArgs {
    pub fn storage(&self) -> Result<FileStorage> {
        let storage = match &self.directory {
            Some(directory) => FileStorage::new(directory),
            None => FileStorage::try_default()?,
        };
        debug!(root = %storage.root().display(), namespace = self.namespace.as_str());
        Ok(storage)
    }
}

/// Restore the workbench, let the closure modify it, and save it back.
pub fn with_workbench<T>(
    state: &StateArgs,
    modify: impl FnOnce(&mut Workbench) -> Result<T>,
) -> Result<T> {
    let mut storage = state.storage()?;
    let mut workbench = Workbench::restore(&storage, &state.namespace)?;
    let output = modify(&mut workbench)?;
    workbench.persist(&mut storage, &state.namespace)?;
    Ok(output)
}

#[instrument(skip_all)]
pub fn list(state: &StateArgs) -> Result {
    let workbench = Workbench::restore(&state.storage()?, &state.namespace)?;
    if workbench.appliances.is_empty() {
        info!("no appliances yet, add one with `add preset` or `add custom`");
    } else {
        println!("{}", build_appliances_table(&workbench.appliances));
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn reset(state: &StateArgs) -> Result {
    let mut storage = state.storage()?;
    let mut workbench = Workbench::restore(&storage, &state.namespace).unwrap_or_else(|error| {
        warn!("discarding unreadable state: {error:#}");
        Workbench::default()
    });
    workbench.reset();
    workbench.persist(&mut storage, &state.namespace)?;
    info!("reset to the defaults");
    Ok(())
}
