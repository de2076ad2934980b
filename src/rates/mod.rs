pub mod resolver;
pub mod table;

pub use resolver::RateResolver;
pub use table::{RateEntry, RateTable};
