//! Expense draft fields and their validation.
//!
//! The split editor sits inside a larger add/edit-expense form.  The
//! surrounding fields get the same treatment as shares: typed values,
//! validation errors as values, nothing silently coerced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fsp_money::Cents;

/// An expense being drafted.  Persistence owns the Expense entity itself;
/// this only carries what the editing workflow needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub date: NaiveDate,
    pub total: Cents,
    pub category: Option<String>,
}

/// Field-level failures for an expense draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftError {
    /// The total must be strictly greater than zero.
    NonPositiveAmount { total: Cents },
    /// The description must contain non-whitespace text.
    BlankDescription,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount { total } => {
                write!(f, "amount must be greater than 0 (got {total})")
            }
            Self::BlankDescription => write!(f, "description is required"),
        }
    }
}

impl std::error::Error for DraftError {}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        date: NaiveDate,
        total: Cents,
        category: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            date,
            total,
            category,
        }
    }

    /// Check the draft's own fields.  Share-level validation is the
    /// Validator's job and runs separately at submission.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.total <= Cents::ZERO {
            return Err(DraftError::NonPositiveAmount { total: self.total });
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::BlankDescription);
        }
        Ok(())
    }
}
