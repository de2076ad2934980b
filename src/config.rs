use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::decimal::{Rate, RoundingMode};
use crate::errors::{ProcessInterestError, Result};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub surcharge: SurchargeConfig,
    pub rounding: RoundingConfig,
}

/// surcharge added on top of the reference rate
///
/// the rate is picked once per claim from the claim's interest-start date:
/// claims starting before `cutover_date` use `rate_before_cutover` for the
/// whole calculation, all others use `rate_from_cutover`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurchargeConfig {
    pub rate_before_cutover: Rate,
    pub rate_from_cutover: Rate,
    pub cutover_date: CalendarDate,
}

/// rounding applied to the final total only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingConfig {
    pub decimal_places: u32,
    pub mode: RoundingMode,
}

impl CalculatorConfig {
    /// statutory regime: 7% surcharge before 01-03-2013, 8% from then on,
    /// totals rounded half away from zero to cents
    pub fn statutory() -> Self {
        Self {
            surcharge: SurchargeConfig::statutory(),
            rounding: RoundingConfig::default(),
        }
    }

    /// load from a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json).map_err(|e| {
            ProcessInterestError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounding.decimal_places > 8 {
            return Err(ProcessInterestError::InvalidConfiguration {
                message: format!(
                    "rounding to {} decimal places is not supported (max 8)",
                    self.rounding.decimal_places
                ),
            });
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::statutory()
    }
}

impl SurchargeConfig {
    pub fn statutory() -> Self {
        Self {
            rate_before_cutover: Rate::from_percentage(dec!(7)),
            rate_from_cutover: Rate::from_percentage(dec!(8)),
            cutover_date: CalendarDate::from_ymd(2013, 3, 1).expect("valid cutover date"),
        }
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            mode: RoundingMode::HalfAwayFromZero,
        }
    }
}
