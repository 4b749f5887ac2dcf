//! fsp-split
//!
//! Expense-splitting and share-allocation core.
//! - Allocator: canonical equal split of a total over a participant set,
//!   remainder cents distributed deterministically in sorted id order.
//! - Reconciler: lock-preserving redistribution of the unlocked remainder
//!   when totals, participants, or locks change.
//! - Validator: the single gate for externally supplied share lists
//!   (structure + exact cent conservation).
//! - Pure deterministic logic (no IO, no time, no persistence wiring).
//!
//! Every operation allocates and returns fresh data; inputs are never
//! mutated, so concurrent callers need no locking.

mod allocator;
mod reconciler;
mod types;
mod validator;

pub use allocator::equal_split;
pub use reconciler::reallocate_with_locks;
pub use types::{share_sum, shares, ParticipantId, ShareInput, ShareSet, SplitError};
pub use validator::validate_shares;
