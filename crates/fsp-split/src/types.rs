//! Shared data shapes for the splitting core.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fsp_money::Cents;

/// Opaque stable identifier for a group member.  Unique within the set
/// passed to any single split operation.
pub type ParticipantId = String;

/// Canonical share mapping (participant id -> amount).
///
/// `BTreeMap` keeps iteration order deterministic, which every consumer
/// (serialization, diffing, re-render) relies on.
pub type ShareSet = BTreeMap<ParticipantId, Cents>;

/// Helper to build a ShareSet literal with minimal boilerplate.
/// Amounts are raw cent counts.
pub fn shares<I, S>(items: I) -> ShareSet
where
    I: IntoIterator<Item = (S, i64)>,
    S: Into<String>,
{
    let mut m = ShareSet::new();
    for (id, cents) in items {
        m.insert(id.into(), Cents::new(cents));
    }
    m
}

/// Sum of all share amounts, saturating at the `i64` cent extremes.
pub fn share_sum(set: &ShareSet) -> Cents {
    set.values()
        .fold(Cents::ZERO, |acc, v| acc.saturating_add(*v))
}

// ---------------------------------------------------------------------------
// Wire shape for caller-supplied share lists
// ---------------------------------------------------------------------------

/// One externally supplied share entry, as it crosses the API boundary.
///
/// `amount` deserializes from either a decimal string or a number; the
/// cent-integer representation never leaks outward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInput {
    pub id: ParticipantId,
    pub amount: Cents,
}

impl ShareInput {
    pub fn new(id: impl Into<String>, amount: Cents) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Caller-input validation failures.  All are returned as values and
/// recovered at the immediate caller; none are fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitError {
    /// An allocation or reconciliation was requested with zero
    /// participants and a positive total.
    EmptyParticipantSet,
    /// A participant id appears more than once in a single operation.
    DuplicateParticipant { id: ParticipantId },
    /// A supplied share amount is negative.
    NegativeAmount { id: ParticipantId, amount: Cents },
    /// Supplied shares omit a participant or include one outside the
    /// authoritative participant set.
    ParticipantMismatch {
        missing: Vec<ParticipantId>,
        unexpected: Vec<ParticipantId>,
    },
    /// Supplied shares do not sum to the total, to the cent.
    SumMismatch { expected: Cents, actual: Cents },
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyParticipantSet => {
                write!(f, "at least one participant must be included")
            }
            Self::DuplicateParticipant { id } => {
                write!(f, "participant '{id}' appears more than once")
            }
            Self::NegativeAmount { id, amount } => {
                write!(f, "share amount cannot be negative ('{id}': {amount})")
            }
            Self::ParticipantMismatch { missing, unexpected } => {
                write!(
                    f,
                    "shares must cover exactly the participant set (missing: {missing:?}, unexpected: {unexpected:?})"
                )
            }
            Self::SumMismatch { expected, actual } => {
                write!(
                    f,
                    "sum of shares ({actual}) must equal total amount ({expected})"
                )
            }
        }
    }
}

impl std::error::Error for SplitError {}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_helper_builds_sorted_map() {
        let s = shares([("b", 200), ("a", 100)]);
        let keys: Vec<&str> = s.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(s["a"], Cents::new(100));
    }

    #[test]
    fn share_sum_adds_all_values() {
        let s = shares([("a", 334), ("b", 333), ("c", 333)]);
        assert_eq!(share_sum(&s), Cents::new(1_000));
        assert_eq!(share_sum(&ShareSet::new()), Cents::ZERO);
    }

    #[test]
    fn share_input_roundtrips_through_json() {
        let input = ShareInput::new("u-1", Cents::new(600));
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"id":"u-1","amount":"6.00"}"#);
        let back: ShareInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn share_input_accepts_numeric_amounts() {
        let back: ShareInput = serde_json::from_str(r#"{"id":"u-1","amount":6.0}"#).unwrap();
        assert_eq!(back.amount, Cents::new(600));
    }

    #[test]
    fn split_error_display_is_non_empty() {
        let errors = [
            SplitError::EmptyParticipantSet,
            SplitError::DuplicateParticipant { id: "a".into() },
            SplitError::NegativeAmount {
                id: "a".into(),
                amount: Cents::new(-1),
            },
            SplitError::ParticipantMismatch {
                missing: vec!["b".into()],
                unexpected: vec![],
            },
            SplitError::SumMismatch {
                expected: Cents::new(1_000),
                actual: Cents::new(999),
            },
        ];
        for e in errors {
            assert!(!e.to_string().is_empty());
        }
    }
}
