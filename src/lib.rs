pub mod calculator;
pub mod config;
pub mod date;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod rates;
pub mod report;

// re-export key types
pub use calculator::{
    calculate_detailed_breakdown, calculate_process_interest, format_amount, AmountInput,
    ProcessInterestCalculator,
};
pub use config::{CalculatorConfig, RoundingConfig, SurchargeConfig};
pub use date::{days_between_inclusive, days_in_year, is_leap_year, CalendarDate};
pub use decimal::{Money, Rate, RoundingMode};
pub use errors::{ProcessInterestError, Result};
pub use interest::{AccrualEngine, AccrualResult, DateRange, Period};
pub use rates::{RateEntry, RateResolver, RateTable};
pub use report::{InterestReport, ReportLine};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
