use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// midpoint handling when rounding a final amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundingMode {
    /// 0.005 -> 0.01, -0.005 -> -0.01
    #[default]
    HalfAwayFromZero,
    /// banker's rounding, 0.005 -> 0.00, 0.015 -> 0.02
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// money amount kept at full decimal precision
///
/// intermediate accrual values are never rounded; rounding happens once,
/// explicitly, through `round_dp` / `round_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string in plain decimal notation (e.g. "1234.56")
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from a binary float, `None` for NaN or infinities
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        Decimal::from_f64(amount).map(Money)
    }

    /// parse text in the local convention: `.` groups thousands, `,` marks decimals
    ///
    /// "1.234,56" -> 1234.56, "250" -> 250, "0,5" -> 0.5. when thousands
    /// separators are present, every group after the first must have
    /// exactly 3 digits ("1.23,00" and "1..0" are rejected).
    pub fn parse_local(text: &str) -> Option<Self> {
        let text = text.trim();
        let (int_part, frac_part) = match text.split_once(',') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text, None),
        };
        let digits = int_part.strip_prefix('-').unwrap_or(int_part);

        let mut groups = digits.split('.');
        let lead = groups.next()?;
        let grouped = digits.contains('.');
        if lead.is_empty() || (grouped && lead.len() > 3) || !lead.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }

        let mut normalized: String = int_part.chars().filter(|c| *c != '.').collect();
        if let Some(frac) = frac_part {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            normalized.push('.');
            normalized.push_str(frac);
        }
        Decimal::from_str(&normalized).ok().map(Money)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half away from zero to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        self.round_with(dp, RoundingMode::HalfAwayFromZero)
    }

    /// round with an explicit midpoint rule
    pub fn round_with(&self, dp: u32, mode: RoundingMode) -> Self {
        Money(self.0.round_dp_with_strategy(dp, mode.strategy()))
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// sum of two amounts, `None` on decimal overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// simple interest for `days` out of a `year_basis`-day year
    ///
    /// `principal * rate / 100 * days / year_basis`, unrounded. `None` on
    /// decimal overflow.
    pub fn apply_rate(&self, annual_rate: Rate, days: u32, year_basis: u32) -> Option<Self> {
        self.0
            .checked_mul(annual_rate.as_percentage())?
            .checked_div(Decimal::ONE_HUNDRED)?
            .checked_mul(Decimal::from(days))?
            .checked_div(Decimal::from(year_basis))
            .map(Money)
    }

    /// render with two decimals in the local convention, e.g. "1.234,56"
    pub fn format_local(&self) -> String {
        let mut rounded = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(2);

        let plain = rounded.to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        format!("{}{},{}", if negative { "-" } else { "" }, grouped, frac_part)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// annual interest rate expressed in percent (1.90 means 1.90%), may be negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// create from percentage (e.g., 8 for 8%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p)
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0
    }

    /// sum of two rates, `None` on decimal overflow
    pub fn checked_add(self, other: Rate) -> Option<Rate> {
        self.0.checked_add(other.0).map(Rate)
    }

    /// render as "1,90%" in the local convention
    pub fn format_local(&self) -> String {
        let mut pct = self.0.round_dp(2);
        pct.rescale(2);
        format!("{}%", pct.to_string().replace('.', ","))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
