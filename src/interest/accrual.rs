use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RoundingConfig;
use crate::date::{days_in_year, CalendarDate};
use crate::decimal::{Money, Rate};
use crate::errors::{ProcessInterestError, Result};
use crate::interest::periods::{split_calendar_years, split_half_years, DateRange};
use crate::rates::RateResolver;

/// one half-year line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub principal: Money,
    pub reference_rate: Rate,
    pub surcharge_rate: Rate,
    pub total_rate: Rate,
    pub day_count: u32,
    /// unrounded
    pub interest: Money,
}

/// ordered breakdown plus the total, rounded once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    pub principal: Money,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub surcharge_rate: Rate,
    pub periods: Vec<Period>,
    pub unrounded_total: Money,
    pub total_interest: Money,
}

impl AccrualResult {
    pub fn total_days(&self) -> u32 {
        self.periods.iter().map(|p| p.day_count).sum()
    }
}

/// simple (non-compounding) day-prorated accrual over variable rates
pub struct AccrualEngine<'a> {
    resolver: RateResolver<'a>,
}

impl<'a> AccrualEngine<'a> {
    pub fn new(resolver: RateResolver<'a>) -> Self {
        Self { resolver }
    }

    /// accrue interest over one half-year range
    ///
    /// the reference rate is the one in force on the range start. the
    /// range is split per calendar year so every day is prorated against
    /// the length of its own year.
    pub fn accrue_period(
        &self,
        principal: Money,
        range: DateRange,
        surcharge_rate: Rate,
    ) -> Result<Period> {
        let reference_rate = self.resolver.reference_rate_on(range.start)?;
        let total_rate = reference_rate.checked_add(surcharge_rate).ok_or_else(|| {
            ProcessInterestError::CalculationError {
                message: format!("rate overflow for {} to {}", range.start, range.end),
            }
        })?;

        let mut interest = Money::ZERO;
        for piece in split_calendar_years(range) {
            let days = piece.days();
            let basis = days_in_year(piece.start.year());
            interest = principal
                .apply_rate(total_rate, days, basis)
                .and_then(|part| interest.checked_add(part))
                .ok_or_else(|| ProcessInterestError::CalculationError {
                    message: format!("interest overflow for {} to {}", piece.start, piece.end),
                })?;
        }

        let period = Period {
            start_date: range.start,
            end_date: range.end,
            principal,
            reference_rate,
            surcharge_rate,
            total_rate,
            day_count: range.days(),
            interest,
        };

        debug!(
            start = %period.start_date,
            end = %period.end_date,
            total_rate = %period.total_rate,
            days = period.day_count,
            interest = %period.interest,
            "accrued period"
        );

        Ok(period)
    }

    /// accrue interest on `principal` from `start` to `end` inclusive
    ///
    /// the surcharge is fixed by `start` for the whole claim. per-period
    /// amounts stay unrounded; only the total is rounded.
    pub fn accrue(
        &self,
        principal: Money,
        start: CalendarDate,
        end: CalendarDate,
        rounding: RoundingConfig,
    ) -> Result<AccrualResult> {
        let surcharge_rate = self.resolver.surcharge_rate_on(start);

        let periods = split_half_years(start, end)
            .map(|range| self.accrue_period(principal, range, surcharge_rate))
            .collect::<Result<Vec<_>>>()?;

        let unrounded_total = periods
            .iter()
            .try_fold(Money::ZERO, |acc, p| acc.checked_add(p.interest))
            .ok_or_else(|| ProcessInterestError::CalculationError {
                message: format!("total interest overflow for {} to {}", start, end),
            })?;
        let total_interest = unrounded_total.round_with(rounding.decimal_places, rounding.mode);

        Ok(AccrualResult {
            principal,
            start_date: start,
            end_date: end,
            surcharge_rate,
            periods,
            unrounded_total,
            total_interest,
        })
    }
}
