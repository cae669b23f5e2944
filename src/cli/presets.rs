use clap::Parser;
use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    presets::{ApplianceCategory, Environment, presets},
    tables::build_presets_table,
};

#[derive(Parser)]
pub struct PresetsArgs {
    /// Only show these environments.
    #[clap(long = "environments", value_delimiter = ',', num_args = 1..)]
    pub environments: Vec<Environment>,

    /// Only show these categories.
    #[clap(long = "categories", value_delimiter = ',', num_args = 1..)]
    pub categories: Vec<ApplianceCategory>,
}

impl PresetsArgs {
    /// Selected environments, or all of them when none is given.
    #[must_use]
    pub fn environments(&self) -> EnumSet<Environment> {
        Some(self.environments.iter().copied().collect::<EnumSet<_>>())
            .filter(|set| !set.is_empty())
            .unwrap_or_else(EnumSet::all)
    }

    /// Selected categories, or all of them when none is given.
    #[must_use]
    pub fn categories(&self) -> EnumSet<ApplianceCategory> {
        Some(self.categories.iter().copied().collect::<EnumSet<_>>())
            .filter(|set| !set.is_empty())
            .unwrap_or_else(EnumSet::all)
    }
}

pub fn list_presets(args: &PresetsArgs) {
    let rows = args
        .environments()
        .iter()
        .cartesian_product(args.categories().iter().collect_vec())
        .flat_map(|(environment, category)| {
            presets(environment, category).iter().map(move |preset| (environment, category, preset))
        });
    println!("{}", build_presets_table(rows));
}
