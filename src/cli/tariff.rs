use clap::Parser;

use crate::{
    cli::{StateArgs, with_workbench},
    core::tariff::TariffForm,
    prelude::*,
    tables::build_tariff_table,
};

/// Values are kept as typed and only read as numbers when calculating.
#[derive(Parser)]
pub struct TariffArgs {
    /// Day (or flat) unit rate, pounds per kilowatt-hour.
    #[clap(long = "day-rate", allow_hyphen_values = true)]
    pub day_rate: Option<String>,

    /// Night unit rate, pounds per kilowatt-hour.
    #[clap(long = "night-rate", allow_hyphen_values = true)]
    pub night_rate: Option<String>,

    /// Length of the night window in hours.
    #[clap(long = "night-hours", allow_hyphen_values = true)]
    pub night_hours: Option<String>,

    /// Standing charge, pounds per day.
    #[clap(long = "standing-charge", allow_hyphen_values = true)]
    pub standing_charge: Option<String>,

    /// VAT rate in percent.
    #[clap(long = "vat", allow_hyphen_values = true)]
    pub vat_rate: Option<String>,

    /// Enable or disable day/night billing.
    #[clap(long = "dual-rate")]
    pub dual_rate: Option<bool>,
}

impl TariffArgs {
    fn apply(&self, form: &mut TariffForm) {
        let fields = [
            (&self.day_rate, &mut form.day_rate),
            (&self.night_rate, &mut form.night_rate),
            (&self.night_hours, &mut form.night_hours),
            (&self.standing_charge, &mut form.standing_charge),
            (&self.vat_rate, &mut form.vat_rate),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
        if let Some(dual_rate) = self.dual_rate {
            form.dual_rate = dual_rate;
        }
    }
}

#[instrument(skip_all)]
pub fn tariff(state: &StateArgs, args: &TariffArgs) -> Result {
    let form = with_workbench(state, |workbench| {
        args.apply(&mut workbench.tariff);
        Ok(workbench.tariff.clone())
    })?;
    println!("{}", build_tariff_table(&form));
    Ok(())
}
