//! Boundary conversion: decimal strings / floats → whole cents.
//!
//! Amounts arrive from untyped call sites as either numbers or strings.
//! Both funnel through exactly one conversion before any arithmetic:
//! round to the nearest cent, half away from zero, then operate on
//! integers only.  Raw decimal arithmetic and cent-integer arithmetic are
//! never mixed.

use crate::cents::Cents;
use crate::CENTS_PER_UNIT;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors produced while converting an external value to cents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoneyError {
    /// The input string is empty or whitespace-only.
    Empty,
    /// The input is not a decimal number.
    Invalid { input: String },
    /// A float input is NaN or infinite.
    NotFinite,
    /// The amount does not fit in an `i64` cent count.
    OutOfRange { input: String },
}

impl std::fmt::Display for MoneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "money amount is empty"),
            Self::Invalid { input } => write!(f, "'{input}' is not a decimal money amount"),
            Self::NotFinite => write!(f, "money amount must be finite"),
            Self::OutOfRange { input } => write!(f, "money amount '{input}' is out of range"),
        }
    }
}

impl std::error::Error for MoneyError {}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

// Enough digits to overflow i64 cents many times over; reject earlier so the
// i128 accumulator below cannot itself overflow.
const MAX_INT_DIGITS: usize = 27;

impl Cents {
    /// Parse a decimal string (`"12.34"`, `"-0.5"`, `"7"`) into cents.
    ///
    /// The parse is exact — no intermediate float.  Fraction digits beyond
    /// the second are rounded to the nearest cent, half away from zero.
    pub fn parse(input: &str) -> Result<Cents, MoneyError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }

        let invalid = || MoneyError::Invalid {
            input: input.to_string(),
        };
        let out_of_range = || MoneyError::OutOfRange {
            input: input.to_string(),
        };

        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };

        // "12.", ".5" and "12.34" are all fine; "." and "" are not.
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if int_part.len() > MAX_INT_DIGITS {
            return Err(out_of_range());
        }

        let mut magnitude: i128 = 0;
        for b in int_part.bytes() {
            magnitude = magnitude * 10 + i128::from(b - b'0');
        }
        magnitude *= i128::from(CENTS_PER_UNIT);

        let frac = frac_part.as_bytes();
        if !frac.is_empty() {
            magnitude += i128::from(frac[0] - b'0') * 10;
        }
        if frac.len() >= 2 {
            magnitude += i128::from(frac[1] - b'0');
        }
        // Nearest cent, half away from zero: the third fraction digit alone
        // decides (5..=9 means the remainder is at least half a cent).
        if frac.len() >= 3 && frac[2] >= b'5' {
            magnitude += 1;
        }

        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed).map(Cents::new).map_err(|_| out_of_range())
    }

    /// Convert a float amount in currency units to cents, rounding half
    /// away from zero.  Rejects NaN, infinities, and out-of-range values.
    pub fn from_f64(value: f64) -> Result<Cents, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        // f64::round is round-half-away-from-zero.
        let scaled = (value * CENTS_PER_UNIT as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(MoneyError::OutOfRange {
                input: value.to_string(),
            });
        }
        Ok(Cents::new(scaled as i64))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
