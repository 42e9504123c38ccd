// Money module: every price, tender and income figure is held as integer
// minor units (paisa) so that comparisons like "tendered < total" are exact.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::error::InputError;

/// Currency label printed after every amount.
pub const CURRENCY: &str = "Tk";

/// A monetary amount in minor units (1/100 Tk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse operator text such as `50`, `50.5` or `1.999` into money.
    /// The digits are read directly into paisa; a third fractional digit of
    /// 5 or more rounds up. Negative amounts, exponents and amounts beyond
    /// `i64` paisa are rejected; `-0` reads as zero.
    pub fn parse_non_negative(text: &str) -> Result<Money, InputError> {
        let text = text.trim();
        let not_a_number = || InputError::NotANumber {
            input: text.to_string(),
        };
        let out_of_range = || InputError::OutOfRange {
            input: text.to_string(),
        };

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(not_a_number());
        }
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !is_digits(frac) {
            return Err(not_a_number());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let fraction = digit(0) * 10 + digit(1) + i64::from(digit(2) >= 5);
        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        if negative && minor != 0 {
            return Err(out_of_range());
        }
        Ok(Money(minor))
    }

    /// Price of `qty` units. Saturates instead of wrapping, so an absurd
    /// quantity reads as an unpayable total.
    pub fn times(&self, qty: i64) -> Money {
        Money(self.0.saturating_mul(qty))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}
