use thiserror::Error;

use crate::date::CalendarDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessInterestError {
    #[error("no reference rate available on {date}: date precedes the rate table")]
    RateNotAvailable {
        date: CalendarDate,
    },

    #[error("rate table is empty")]
    EmptyRateTable,

    #[error("duplicate rate table entry for {date}")]
    DuplicateRateEntry {
        date: CalendarDate,
    },

    #[error("invalid rate table: {message}")]
    InvalidRateTable {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ProcessInterestError>;
