//! Lock-preserving reallocation.
//!
//! When a caller edits individual shares, the edited participants become
//! "locked": their amounts are held fixed while the unlocked remainder is
//! re-split equally.  The pass is idempotent — interactive surfaces call it
//! on every keystroke-driven change and must not accumulate drift.

use std::collections::BTreeSet;

use crate::types::{ParticipantId, ShareSet, SplitError};
use fsp_money::Cents;

/// Redistribute `total` over `participants`, holding every id in `locks`
/// at its value from `current`.
///
/// Rules:
/// - Locked entries are copied verbatim from `current`; a locked id absent
///   from `current` contributes zero.
/// - `remaining = max(0, total - locked_sum)` — locked amounts are never
///   reduced, even when they exceed the total; unlocked participants may
///   collectively receive zero.
/// - The remainder is split over the unlocked subset with the same
///   base-plus-remainder rule as the Allocator, extra cents to the first
///   sorted unlocked ids.
/// - Participants absent from `participants` are dropped, even if present
///   in `current`; every listed participant gets exactly one entry.
/// - With no unlocked participants the locked values pass through and the
///   output sum may legitimately differ from `total`; the Validator
///   reports that on submission, this layer does not.
///
/// # Errors
///
/// Same empty-set and duplicate-id policy as [`crate::equal_split`].
pub fn reallocate_with_locks(
    total: Cents,
    participants: &[ParticipantId],
    locks: &BTreeSet<ParticipantId>,
    current: &ShareSet,
) -> Result<ShareSet, SplitError> {
    debug_assert!(
        total.is_non_negative(),
        "negative totals must be rejected before reallocation"
    );

    if participants.is_empty() {
        return if total == Cents::ZERO {
            Ok(ShareSet::new())
        } else {
            Err(SplitError::EmptyParticipantSet)
        };
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for id in participants {
        if !seen.insert(id.as_str()) {
            return Err(SplitError::DuplicateParticipant { id: id.clone() });
        }
    }

    let mut out = ShareSet::new();
    let mut locked_sum: i128 = 0;
    let mut unlocked: Vec<&ParticipantId> = Vec::new();

    for id in participants {
        if locks.contains(id) {
            let held = current.get(id).copied().unwrap_or(Cents::ZERO);
            locked_sum += i128::from(held.raw());
            out.insert(id.clone(), held);
        } else {
            unlocked.push(id);
        }
    }

    if unlocked.is_empty() {
        return Ok(out);
    }

    // locked_sum can exceed the total (or be negative if current holds
    // unvalidated values); the i128 intermediate keeps the subtraction exact.
    let remaining = (i128::from(total.raw()) - locked_sum).max(0);
    let remaining = i64::try_from(remaining).unwrap_or(i64::MAX);

    unlocked.sort();
    let n = unlocked.len() as i64;
    let base = remaining / n;
    let remainder = remaining % n;

    for (idx, id) in unlocked.into_iter().enumerate() {
        let cents = base + i64::from((idx as i64) < remainder);
        out.insert(id.clone(), Cents::new(cents));
    }
    Ok(out)
}
