use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::date::CalendarDate;
use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::{AccrualEngine, AccrualResult, Period};
use crate::rates::{RateResolver, RateTable};

/// principal as supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    /// local text convention, "1.234,56"
    Text(&'a str),
    /// an exact amount
    Value(Money),
    /// a plain binary number, NaN and infinities are rejected
    Float(f64),
}

impl AmountInput<'_> {
    pub fn to_money(&self) -> Option<Money> {
        match self {
            AmountInput::Text(text) => Money::parse_local(text),
            AmountInput::Value(money) => Some(*money),
            AmountInput::Float(value) => Money::from_f64(*value),
        }
    }
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(text: &'a str) -> Self {
        AmountInput::Text(text)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(text: &'a String) -> Self {
        AmountInput::Text(text.as_str())
    }
}

impl From<Money> for AmountInput<'_> {
    fn from(money: Money) -> Self {
        AmountInput::Value(money)
    }
}

impl From<Decimal> for AmountInput<'_> {
    fn from(d: Decimal) -> Self {
        AmountInput::Value(Money::from_decimal(d))
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(value: f64) -> Self {
        AmountInput::Float(value)
    }
}

/// process interest calculator over a rate table and configuration
///
/// invalid input (unparseable dates or amount, non-positive amount, start
/// after end) yields `Ok(None)`; a date outside the rate table yields `Err`.
#[derive(Debug, Clone)]
pub struct ProcessInterestCalculator<'t> {
    table: &'t RateTable,
    config: CalculatorConfig,
}

impl ProcessInterestCalculator<'static> {
    /// calculator over the shipped rate table with statutory settings
    pub fn statutory() -> Result<Self> {
        Self::new(RateTable::statutory()?, CalculatorConfig::statutory())
    }
}

impl<'t> ProcessInterestCalculator<'t> {
    pub fn new(table: &'t RateTable, config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn table(&self) -> &'t RateTable {
        self.table
    }

    /// full accrual for textual input
    pub fn calculate<'a>(
        &self,
        amount: impl Into<AmountInput<'a>>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<AccrualResult>> {
        let Some(start) = CalendarDate::parse(start_date) else {
            debug!(start_date, "rejected claim: unparseable start date");
            return Ok(None);
        };
        let Some(end) = CalendarDate::parse(end_date) else {
            debug!(end_date, "rejected claim: unparseable end date");
            return Ok(None);
        };
        let amount = amount.into();
        let Some(principal) = amount.to_money() else {
            debug!(?amount, "rejected claim: unparseable amount");
            return Ok(None);
        };

        self.accrue(principal, start, end)
    }

    /// full accrual for already typed input
    pub fn accrue(
        &self,
        principal: Money,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<Option<AccrualResult>> {
        if start > end {
            debug!(start = %start, end = %end, "rejected claim: start after end");
            return Ok(None);
        }
        if !principal.is_positive() {
            debug!(principal = %principal, "rejected claim: amount must be positive");
            return Ok(None);
        }

        let resolver = RateResolver::new(self.table, &self.config.surcharge);
        let result = AccrualEngine::new(resolver).accrue(principal, start, end, self.config.rounding)?;

        debug!(
            start = %start,
            end = %end,
            periods = result.periods.len(),
            total = %result.total_interest,
            "calculated process interest"
        );
        Ok(Some(result))
    }

    /// rounded total interest, `None` for invalid input
    pub fn calculate_process_interest<'a>(
        &self,
        amount: impl Into<AmountInput<'a>>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<Money>> {
        Ok(self
            .calculate(amount, start_date, end_date)?
            .map(|r| r.total_interest))
    }

    /// one period per half-year piece, empty for invalid input
    pub fn calculate_detailed_breakdown<'a>(
        &self,
        amount: impl Into<AmountInput<'a>>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Period>> {
        Ok(self
            .calculate(amount, start_date, end_date)?
            .map(|r| r.periods)
            .unwrap_or_default())
    }

    /// accrue from `start_date` up to and including the provider's current date
    pub fn calculate_until_today<'a>(
        &self,
        amount: impl Into<AmountInput<'a>>,
        start_date: &str,
        time_provider: &SafeTimeProvider,
    ) -> Result<Option<AccrualResult>> {
        let today = CalendarDate::from(time_provider.now().date_naive());
        self.calculate(amount, start_date, &today.format())
    }
}

/// rounded process interest using the shipped rate table and statutory settings
pub fn calculate_process_interest<'a>(
    amount: impl Into<AmountInput<'a>>,
    start_date: &str,
    end_date: &str,
) -> Result<Option<Money>> {
    ProcessInterestCalculator::statutory()?.calculate_process_interest(amount, start_date, end_date)
}

/// per-period breakdown using the shipped rate table and statutory settings
pub fn calculate_detailed_breakdown<'a>(
    amount: impl Into<AmountInput<'a>>,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<Period>> {
    ProcessInterestCalculator::statutory()?.calculate_detailed_breakdown(amount, start_date, end_date)
}

/// two decimals in the local convention; a missing amount renders as "0,00"
pub fn format_amount(amount: Option<Money>) -> String {
    amount.unwrap_or(Money::ZERO).format_local()
}
