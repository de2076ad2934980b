pub mod accrual;
pub mod periods;

pub use accrual::{AccrualEngine, AccrualResult, Period};
pub use periods::{split_calendar_years, split_half_years, DateRange, Segments};
