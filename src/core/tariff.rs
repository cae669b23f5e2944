use serde::{Deserialize, Serialize};

use crate::{
    parse::parse_number,
    quantity::{cost::Cost, proportions::Percentage, rate::KilowattHourRate, time::Hours},
};

/// Tariff settings as the user typed them.
///
/// The fields stay free-form text so that a half-typed value survives a save and restore,
/// and are only turned into numbers by [`TariffForm::parse`].
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffForm {
    pub day_rate: String,
    pub night_rate: String,
    pub night_hours: String,
    pub standing_charge: String,
    pub vat_rate: String,
    pub dual_rate: bool,
}

impl Default for TariffForm {
    fn default() -> Self {
        Self {
            day_rate: "0.30".to_owned(),
            night_rate: "0.15".to_owned(),
            night_hours: "7".to_owned(),
            standing_charge: "0.60".to_owned(),
            vat_rate: "5".to_owned(),
            dual_rate: false,
        }
    }
}

impl TariffForm {
    /// Read the numbers, coercing anything unreadable to zero.
    pub fn parse(&self) -> TariffConfiguration {
        TariffConfiguration {
            day_rate: KilowattHourRate(parse_number(&self.day_rate)),
            night_rate: KilowattHourRate(parse_number(&self.night_rate)),
            night_hours: Hours(parse_number(&self.night_hours)),
            standing_charge: Cost(parse_number(&self.standing_charge)),
            vat_rate: Percentage(parse_number(&self.vat_rate)),
            dual_rate: self.dual_rate,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TariffConfiguration {
    pub day_rate: KilowattHourRate,

    /// Only used with [`TariffConfiguration::dual_rate`].
    pub night_rate: KilowattHourRate,

    /// Length of the cheap nightly window.
    pub night_hours: Hours,

    /// Fixed charge per day, regardless of consumption.
    pub standing_charge: Cost,

    /// Applied on top of the energy cost and the standing charge.
    pub vat_rate: Percentage,

    /// Economy 7/10 style day and night billing.
    pub dual_rate: bool,
}

impl Default for TariffConfiguration {
    fn default() -> Self {
        TariffForm::default().parse()
    }
}

impl TariffConfiguration {
    /// Dual-rate billing only applies when there is an actual night window.
    #[must_use]
    pub fn has_night_window(&self) -> bool {
        self.dual_rate && self.night_hours > Hours::ZERO
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let tariff = TariffConfiguration::default();
        assert_abs_diff_eq!(tariff.day_rate.0, 0.30);
        assert_abs_diff_eq!(tariff.night_rate.0, 0.15);
        assert_abs_diff_eq!(tariff.night_hours.0, 7.0);
        assert_abs_diff_eq!(tariff.standing_charge.0, 0.60);
        assert_abs_diff_eq!(tariff.vat_rate.0, 5.0);
        assert!(!tariff.dual_rate);
    }

    #[test]
    fn test_parse_coerces_garbage() {
        let form = TariffForm {
            day_rate: "27.5p".to_owned(),
            night_rate: "cheap".to_owned(),
            night_hours: String::new(),
            ..TariffForm::default()
        };
        let tariff = form.parse();
        assert_abs_diff_eq!(tariff.day_rate.0, 27.5);
        assert_abs_diff_eq!(tariff.night_rate.0, 0.0);
        assert_abs_diff_eq!(tariff.night_hours.0, 0.0);
    }

    #[test]
    fn test_night_window() {
        let mut tariff = TariffConfiguration { dual_rate: true, ..TariffConfiguration::default() };
        assert!(tariff.has_night_window());
        tariff.night_hours = Hours::ZERO;
        assert!(!tariff.has_night_window());
        tariff.night_hours = Hours(-1.0);
        assert!(!tariff.has_night_window());
    }

    #[test]
    fn test_deserialize_partial_form() {
        let form: TariffForm = serde_json::from_str(r#"{"day_rate": "0.25"}"#).unwrap();
        assert_eq!(form.day_rate, "0.25");
        assert_eq!(form.vat_rate, "5");
    }
}
