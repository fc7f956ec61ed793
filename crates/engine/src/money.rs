use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::EngineError;

/// Currency glyph the ledger has always been written with.
pub const DEFAULT_SYMBOL: &str = "₱";

/// Signed money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (row amounts,
/// dashboard totals) to avoid floating-point drift.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(1_234_50);
/// assert_eq!(amount.cents(), 123450);
/// assert_eq!(amount.to_string(), "1234.50");
/// assert_eq!(amount.format_with("₱"), "₱1,234.50");
/// ```
///
/// User input may carry the currency glyph and thousands separators:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!(Money::parse_input("₱1,500.5", "₱").unwrap().cents(), 150050);
/// assert!(Money::parse_input("abc", "₱").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Clamps at the `i64` bounds instead of overflowing.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    #[must_use]
    pub const fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Whole units, without the cents.
    #[must_use]
    pub const fn whole_units(self) -> u64 {
        self.0.unsigned_abs() / 100
    }

    /// Lossy conversion used for ratios and chart geometry.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parses a value typed by the user or read from a foreign CSV.
    ///
    /// The currency glyph (`₱` and `symbol`), thousands separators and
    /// surrounding whitespace are dropped before parsing.
    pub fn parse_input(raw: &str, symbol: &str) -> Result<Self, EngineError> {
        let mut cleaned = raw.replace(DEFAULT_SYMBOL, "");
        if !symbol.is_empty() {
            cleaned = cleaned.replace(symbol, "");
        }
        cleaned.replace(',', "").trim().parse()
    }

    /// Renders the amount for display, e.g. `₱1,234.50` or `-₱12.00`.
    #[must_use]
    pub fn format_with(self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let digits = (abs / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{sign}{symbol}{grouped}.{:02}", abs % 100)
    }
}

/// Plain on-disk form: no symbol, no separators (`1234.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a plain decimal string into cents.
    ///
    /// Accepts an optional leading `+`/`-`, `.` as decimal separator and at
    /// most 2 fractional digits. Symbols and separators must already be
    /// stripped (see [`Money::parse_input`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || EngineError::InvalidAmount("Amount must be numeric (e.g., 500 or 500.50).".into());
        let overflow = || EngineError::InvalidAmount("Amount is too large.".to_string());

        let trimmed = s.trim();
        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let mut parts = rest.split('.');
        let whole_str = parts.next().unwrap_or("");
        let frac_str = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }
        if whole_str.is_empty() && frac_str.is_none_or(str::is_empty) {
            return Err(invalid());
        }
        if !whole_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| overflow())?
        };

        let cents: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidAmount(
                            "Amount can have at most two decimals.".to_string(),
                        ));
                    }
                }
            }
        };

        let total = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_decimal() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(50_000).to_string(), "500.00");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn format_with_groups_thousands() {
        assert_eq!(Money::new(0).format_with("₱"), "₱0.00");
        assert_eq!(Money::new(99_999).format_with("₱"), "₱999.99");
        assert_eq!(Money::new(100_000).format_with("₱"), "₱1,000.00");
        assert_eq!(Money::new(123_456_789).format_with("₱"), "₱1,234,567.89");
        assert_eq!(Money::new(-1_200).format_with("$"), "-$12.00");
    }

    #[test]
    fn checked_and_saturating_sums_stop_at_the_bounds() {
        let big = Money::new(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::new(1)), Some(Money::new(i64::MAX)));
        assert_eq!(big.checked_add(Money::new(2)), None);
        assert_eq!(big.saturating_add(Money::new(100)), Money::new(i64::MAX));
        assert_eq!(
            Money::new(i64::MIN + 1).saturating_sub(Money::new(5)),
            Money::new(i64::MIN)
        );
    }

    #[test]
    fn parse_accepts_plain_decimals() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("500.".parse::<Money>().unwrap().cents(), 50_000);
        assert_eq!(".25".parse::<Money>().unwrap().cents(), 25);
        assert_eq!("-0.01".parse::<Money>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<Money>().unwrap().cents(), 100);
    }

    #[test]
    fn parse_rejects_garbage() {
        for raw in ["", ".", "-", "abc", "1.2.3", "12a", "1,5", "12.345"] {
            assert!(raw.parse::<Money>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn parse_input_strips_symbol_and_separators() {
        assert_eq!(Money::parse_input(" ₱1,234.50 ", "₱").unwrap().cents(), 123_450);
        assert_eq!(Money::parse_input("$2,000", "$").unwrap().cents(), 200_000);
        assert_eq!(Money::parse_input("₱75", "$").unwrap().cents(), 7_500);
    }
}
