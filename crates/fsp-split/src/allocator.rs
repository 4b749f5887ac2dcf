//! Canonical equal split.
//!
//! Given a total in cents and a participant set, every participant receives
//! `total / n` cents and the remainder is handed out one cent at a time to
//! the first `total % n` participants **in sorted id order**.  Sorting is a
//! deliberate canonicalization: equal splits are reproducible regardless of
//! the order a caller supplies participants in, so the creation path, the
//! update path, and the interactive editor all agree to the cent.

use crate::types::{ParticipantId, ShareSet, SplitError};
use fsp_money::Cents;

/// Split `total` equally over `participants`.
///
/// Conservation holds by construction: `n * base + remainder = total`.
///
/// # Errors
///
/// - [`SplitError::EmptyParticipantSet`] if `participants` is empty and
///   `total` is positive (a zero total over zero participants is an empty
///   `ShareSet`, nothing was discarded).
/// - [`SplitError::DuplicateParticipant`] if an id repeats; a duplicate
///   would silently collapse into one map key and break conservation.
///
/// Negative totals are rejected by the caller layer (validation/creation
/// logic); this function assumes a non-negative input.
pub fn equal_split(total: Cents, participants: &[ParticipantId]) -> Result<ShareSet, SplitError> {
    debug_assert!(
        total.is_non_negative(),
        "negative totals must be rejected before allocation"
    );

    if participants.is_empty() {
        return if total == Cents::ZERO {
            Ok(ShareSet::new())
        } else {
            Err(SplitError::EmptyParticipantSet)
        };
    }

    let mut sorted: Vec<&ParticipantId> = participants.iter().collect();
    sorted.sort();
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(SplitError::DuplicateParticipant {
                id: pair[0].clone(),
            });
        }
    }

    let n = sorted.len() as i64;
    let base = total.raw() / n;
    let remainder = total.raw() % n;

    let mut out = ShareSet::new();
    for (idx, id) in sorted.into_iter().enumerate() {
        let cents = base + i64::from((idx as i64) < remainder);
        out.insert(id.clone(), Cents::new(cents));
    }
    Ok(out)
}
