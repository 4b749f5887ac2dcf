//! Fixed-point money type.
//!
//! # Motivation
//!
//! All money amounts in this system use a 1e-2 (cents) fixed-point
//! representation stored as `i64`.  Using raw `i64` for money is error-prone:
//! it allows accidental arithmetic with unrelated integers (participant
//! counts, ids) without any compile-time signal.
//!
//! `Cents` wraps the raw `i64` so the type system prevents:
//! - Implicit construction from raw `i64` (no `From<i64>` impl).
//! - Mixing `Cents` with unrelated `i64` values in arithmetic.
//!
//! # Scale
//!
//! 1 currency unit = 100 Cents.  Non-monetary quantities (participant
//! counts, remainder indices) remain plain integers and are never
//! implicitly convertible.
//!
//! # Wire format
//!
//! `Cents` serializes as a two-decimal string (`"12.34"`) and deserializes
//! from either a decimal string or a JSON number.  The raw cent integer
//! never crosses a serialization boundary.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CENTS_PER_UNIT;

/// A fixed-point monetary amount in whole cents.
///
/// 1 currency unit = `Cents(100)`.
///
/// # Construction
///
/// Use [`Cents::new`] when the raw integer is already a cent count, or
/// [`Cents::parse`] / [`Cents::from_f64`] at external boundaries.  There is
/// intentionally no `From<i64>` implementation — callers must be deliberate
/// about when a raw integer represents money.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    /// Zero monetary amount.
    pub const ZERO: Cents = Cents(0);

    /// Maximum representable value.
    pub const MAX: Cents = Cents(i64::MAX);

    /// Minimum representable value.
    pub const MIN: Cents = Cents(i64::MIN);

    /// Construct from a raw cent count.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Cents(raw)
    }

    /// Extract the underlying raw cent count.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Saturating addition — clamps at [`Cents::MAX`] on overflow.
    #[inline]
    pub fn saturating_add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction — clamps at [`Cents::MIN`] on underflow.
    #[inline]
    pub fn saturating_sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }

    /// Checked addition.  Returns `None` on overflow; callers summing
    /// externally supplied share lists must handle this explicitly.
    #[inline]
    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Cents)
    }

    /// `true` if this amount is non-negative.
    #[inline]
    pub fn is_non_negative(self) -> bool {
        self.0 >= 0
    }

    /// `true` if this amount is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

// ---------------------------------------------------------------------------
// Arithmetic operators (closed over Cents)
// ---------------------------------------------------------------------------

impl Add for Cents {
    type Output = Cents;
    #[inline]
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    #[inline]
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Cents;
    #[inline]
    fn neg(self) -> Cents {
        Cents(-self.0)
    }
}

impl AddAssign for Cents {
    #[inline]
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    #[inline]
    fn sub_assign(&mut self, rhs: Cents) {
        self.0 -= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let frac = (self.0 % CENTS_PER_UNIT).abs();
        // When |value| < 1 unit and value is negative, units truncates to 0,
        // losing the sign.  Emit "-0" explicitly in that case.
        if self.0 < 0 && units == 0 {
            write!(f, "-{units}.{frac:02}")
        } else {
            write!(f, "{units}.{frac:02}")
        }
    }
}

// ---------------------------------------------------------------------------
// Serde: two-decimal string out, string-or-number in
// ---------------------------------------------------------------------------

impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct CentsVisitor;

impl Visitor<'_> for CentsVisitor {
    type Value = Cents;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a decimal money string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Cents, E> {
        Cents::parse(v).map_err(de::Error::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Cents, E> {
        Cents::from_f64(v).map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cents, E> {
        // Whole-unit integer amount, e.g. JSON `6` meaning 6.00.
        v.checked_mul(CENTS_PER_UNIT)
            .map(Cents)
            .ok_or_else(|| de::Error::custom("money amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cents, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(CENTS_PER_UNIT))
            .map(Cents)
            .ok_or_else(|| de::Error::custom("money amount out of range"))
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Cents, D::Error> {
        deserializer.deserialize_any(CentsVisitor)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_additive_identity() {
        let a = Cents::new(4_200);
        assert_eq!(a + Cents::ZERO, a);
        assert_eq!(Cents::ZERO + a, a);
    }

    #[test]
    fn add_and_sub_roundtrip() {
        let a = Cents::new(10_000);
        let b = Cents::new(2_500);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn neg_produces_opposite_sign() {
        let pos = Cents::new(500);
        assert_eq!((-pos).raw(), -500);
        assert_eq!(-(-pos), pos);
    }

    #[test]
    fn saturating_add_clamps_at_max() {
        assert_eq!(Cents::MAX.saturating_add(Cents::new(1)), Cents::MAX);
    }

    #[test]
    fn saturating_sub_clamps_at_min() {
        assert_eq!(Cents::MIN.saturating_sub(Cents::new(1)), Cents::MIN);
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Cents::MAX.checked_add(Cents::new(1)), None);
        assert_eq!(
            Cents::new(100).checked_add(Cents::new(50)),
            Some(Cents::new(150))
        );
    }

    #[test]
    fn sign_predicates() {
        assert!(Cents::ZERO.is_non_negative());
        assert!(Cents::new(1).is_non_negative());
        assert!(Cents::new(-1).is_negative());
        assert!(!Cents::new(-1).is_non_negative());
    }

    #[test]
    fn display_two_decimal_places() {
        assert_eq!(Cents::new(1_234).to_string(), "12.34");
        assert_eq!(Cents::new(600).to_string(), "6.00");
        assert_eq!(Cents::ZERO.to_string(), "0.00");
    }

    #[test]
    fn display_negative_sub_unit_keeps_sign() {
        assert_eq!(Cents::new(-50).to_string(), "-0.50");
        assert_eq!(Cents::new(-275).to_string(), "-2.75");
    }

    #[test]
    fn serializes_as_two_decimal_string() {
        let json = serde_json::to_string(&Cents::new(1_234)).unwrap();
        assert_eq!(json, "\"12.34\"");
    }

    #[test]
    fn deserializes_from_string_and_number() {
        let from_str: Cents = serde_json::from_str("\"6.00\"").unwrap();
        let from_float: Cents = serde_json::from_str("6.0").unwrap();
        let from_int: Cents = serde_json::from_str("6").unwrap();
        assert_eq!(from_str, Cents::new(600));
        assert_eq!(from_float, Cents::new(600));
        assert_eq!(from_int, Cents::new(600));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Cents>("\"abc\"").is_err());
        assert!(serde_json::from_str::<Cents>("{}").is_err());
    }
}
