//! Validation gate for externally supplied share lists.
//!
//! Any share list that did not come out of the Allocator or Reconciler must
//! pass through here before being accepted as authoritative for an expense.
//! Checks run in a fixed order and the first failure wins, so callers can
//! surface one stable, specific message per attempt.

use std::collections::BTreeSet;

use crate::types::{ParticipantId, ShareInput, ShareSet, SplitError};
use fsp_money::Cents;

/// Validate `shares` against `total` and the authoritative `participants`
/// set, returning the accepted `ShareSet` on success.
///
/// Check order (first failure wins):
/// 1. every amount is non-negative,
/// 2. no participant id repeats,
/// 3. the supplied ids cover exactly `participants`,
/// 4. the amounts sum to `total`, exactly, in cents.
pub fn validate_shares(
    total: Cents,
    participants: &BTreeSet<ParticipantId>,
    shares: &[ShareInput],
) -> Result<ShareSet, SplitError> {
    // 1. Negative amounts
    for share in shares {
        if share.amount.is_negative() {
            return Err(SplitError::NegativeAmount {
                id: share.id.clone(),
                amount: share.amount,
            });
        }
    }

    // 2. Duplicates
    let mut supplied: BTreeSet<&str> = BTreeSet::new();
    for share in shares {
        if !supplied.insert(share.id.as_str()) {
            return Err(SplitError::DuplicateParticipant {
                id: share.id.clone(),
            });
        }
    }

    // 3. Exact coverage of the participant set
    let missing: Vec<ParticipantId> = participants
        .iter()
        .filter(|id| !supplied.contains(id.as_str()))
        .cloned()
        .collect();
    let unexpected: Vec<ParticipantId> = supplied
        .iter()
        .filter(|id| !participants.contains(**id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(SplitError::ParticipantMismatch { missing, unexpected });
    }

    // 4. Exact cent conservation.  The i128 sum cannot overflow, so a
    // pathological input cannot wrap its way past this check.
    let actual: i128 = shares.iter().map(|s| i128::from(s.amount.raw())).sum();
    if actual != i128::from(total.raw()) {
        let actual = i64::try_from(actual).map(Cents::new).unwrap_or(Cents::MAX);
        return Err(SplitError::SumMismatch {
            expected: total,
            actual,
        });
    }

    Ok(shares
        .iter()
        .map(|s| (s.id.clone(), s.amount))
        .collect())
}
