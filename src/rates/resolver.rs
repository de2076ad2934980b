use tracing::warn;

use crate::config::SurchargeConfig;
use crate::date::CalendarDate;
use crate::decimal::Rate;
use crate::errors::{ProcessInterestError, Result};
use crate::rates::RateTable;

/// looks up the rates that make up the process interest rate
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    table: &'a RateTable,
    surcharge: &'a SurchargeConfig,
}

impl<'a> RateResolver<'a> {
    pub fn new(table: &'a RateTable, surcharge: &'a SurchargeConfig) -> Self {
        Self { table, surcharge }
    }

    /// reference rate in force on `date`
    ///
    /// a date before the first table entry means the table does not cover
    /// the claim; that is reported, never defaulted.
    pub fn reference_rate_on(&self, date: CalendarDate) -> Result<Rate> {
        match self.table.entry_on(date) {
            Some(entry) => Ok(entry.rate),
            None => {
                warn!(
                    date = %date,
                    earliest = %self.table.earliest().effective_date,
                    "date precedes reference rate table"
                );
                Err(ProcessInterestError::RateNotAvailable { date })
            }
        }
    }

    /// surcharge for a claim, chosen by the claim's interest-start date
    pub fn surcharge_rate_on(&self, interest_start: CalendarDate) -> Rate {
        if interest_start < self.surcharge.cutover_date {
            self.surcharge.rate_before_cutover
        } else {
            self.surcharge.rate_from_cutover
        }
    }

    pub fn table(&self) -> &'a RateTable {
        self.table
    }
}
