//! fsp-money
//!
//! Fixed-point money for the expense-splitting core.
//! - All amounts are whole numbers of cents stored as `i64` (`Cents`).
//! - Conversion from the outside world (decimal strings, JSON numbers)
//!   happens exactly once, at the boundary, rounding half away from zero.
//! - Pure deterministic logic (no IO, no floats past the boundary).

mod cents;
mod parse;

pub use cents::Cents;
pub use parse::MoneyError;

/// Cents scale: 1 currency unit = 100 cents.
pub const CENTS_PER_UNIT: i64 = 100;
