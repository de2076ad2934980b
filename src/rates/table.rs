use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::date::CalendarDate;
use crate::decimal::Rate;
use crate::errors::{ProcessInterestError, Result};

/// embedded reference-rate dataset, newest entry first
const STATUTORY_RATES: &str = include_str!("reference_rates.json");

/// a reference rate taking effect on `effective_date`, in force until the next entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub effective_date: CalendarDate,
    pub rate: Rate,
}

impl RateEntry {
    pub fn new(effective_date: CalendarDate, rate: Rate) -> Self {
        Self { effective_date, rate }
    }
}

/// immutable reference-rate table
///
/// entries are held in ascending date order regardless of the order they
/// were supplied in; the published dataset lists the newest change first.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// build from entries in any order, rejecting empty tables and duplicate dates
    pub fn new(mut entries: Vec<RateEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ProcessInterestError::EmptyRateTable);
        }

        entries.sort_by_key(|e| e.effective_date);
        if let Some(pair) = entries.windows(2).find(|w| w[0].effective_date == w[1].effective_date) {
            return Err(ProcessInterestError::DuplicateRateEntry {
                date: pair[0].effective_date,
            });
        }

        Ok(Self { entries })
    }

    /// parse a json array of `{ "effective_date": "DD-MM-YYYY", "rate": "1.90" }`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<RateEntry> = serde_json::from_str(json).map_err(|e| {
            ProcessInterestError::InvalidRateTable {
                message: e.to_string(),
            }
        })?;
        Self::new(entries)
    }

    /// the shipped statutory table, parsed once per process
    pub fn statutory() -> Result<&'static RateTable> {
        static TABLE: OnceLock<Result<RateTable>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::from_json(STATUTORY_RATES))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// entry in force on `date`: the latest one whose effective date is not after it
    pub fn entry_on(&self, date: CalendarDate) -> Option<&RateEntry> {
        let idx = self.entries.partition_point(|e| e.effective_date <= date);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// entries in ascending date order
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn earliest(&self) -> &RateEntry {
        &self.entries[0]
    }

    pub fn latest(&self) -> &RateEntry {
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
