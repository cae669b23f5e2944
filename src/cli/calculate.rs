use clap::Parser;

use crate::{
    cli::StateArgs,
    core::summary::AggregateResult,
    prelude::*,
    tables::{build_appliance_summary_table, build_breakdown_table, build_totals_table},
    workbench::Workbench,
};

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(long, value_enum, default_value = "table")]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Table,

    /// Pretty-printed JSON.
    Json,

    /// TOML document.
    Toml,
}

#[instrument(skip_all)]
pub fn calculate(state: &StateArgs, args: &CalculateArgs) -> Result {
    let workbench = Workbench::restore(&state.storage()?, &state.namespace)?;
    let Some(result) = workbench.calculate() else {
        warn!(
            n_appliances = workbench.appliances.len(),
            day_rate = workbench.tariff.day_rate.as_str(),
            "nothing to show, add an appliance and make sure the day rate is set",
        );
        return Ok(());
    };
    println!("{}", render(&result, args.format)?);
    Ok(())
}

fn render(result: &AggregateResult, format: Format) -> Result<String> {
    match format {
        Format::Table => Ok([
            build_totals_table(result).to_string(),
            build_breakdown_table(result).to_string(),
            build_appliance_summary_table(result).to_string(),
        ]
        .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(result)?),
        Format::Toml => Ok(toml::to_string_pretty(result)?),
    }
}
