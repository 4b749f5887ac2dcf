//! Split-editing session reducer.
//!
//! State machine: a session starts in Equal mode seeded by the Allocator,
//! moves to Custom when the caller starts editing amounts (each edit locks
//! the edited participant and re-balances the rest), and is gated by the
//! Validator on submission.  Switching back to Equal discards all locks.
//!
//! The reducer is pure: `apply` never mutates `self`, it returns a fresh
//! session.  Errors leave the previous session untouched, so a caller that
//! keeps the old value loses nothing on a rejected event.

use std::collections::BTreeSet;

use fsp_money::Cents;
use fsp_split::{
    equal_split, reallocate_with_locks, validate_shares, ParticipantId, ShareInput, ShareSet,
    SplitError,
};

/// How the total is being divided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// Canonical equal split, recomputed by the Allocator on every change.
    Equal,
    /// Manually adjusted amounts, re-balanced by the Reconciler with locks.
    Custom,
}

/// One user action against the split being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitEvent {
    TotalChanged(Cents),
    ParticipantAdded(ParticipantId),
    ParticipantRemoved(ParticipantId),
    /// Manual amount edit.  Locks the edited participant at the (clamped)
    /// new amount.  Ignored in Equal mode, where per-participant inputs
    /// are disabled.
    ShareEdited { id: ParticipantId, amount: Cents },
    /// Release one participant's lock and re-balance.
    LockCleared(ParticipantId),
    ModeChanged(SplitMode),
}

/// Immutable snapshot of an in-progress split edit.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitSession {
    total: Cents,
    participants: Vec<ParticipantId>,
    mode: SplitMode,
    locks: BTreeSet<ParticipantId>,
    shares: ShareSet,
}

impl SplitSession {
    /// Open a session in Equal mode, seeded by the Allocator.
    pub fn new(total: Cents, participants: Vec<ParticipantId>) -> Result<Self, SplitError> {
        let shares = equal_split(total, &participants)?;
        Ok(Self {
            total,
            participants,
            mode: SplitMode::Equal,
            locks: BTreeSet::new(),
            shares,
        })
    }

    pub fn total(&self) -> Cents {
        self.total
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn locks(&self) -> &BTreeSet<ParticipantId> {
        &self.locks
    }

    pub fn shares(&self) -> &ShareSet {
        &self.shares
    }

    /// Apply one event, producing the next session.
    ///
    /// On error the caller keeps the previous session; in-progress edits
    /// are never dropped.
    pub fn apply(&self, event: &SplitEvent) -> Result<SplitSession, SplitError> {
        match event {
            SplitEvent::TotalChanged(total) => self.with_total(*total),
            SplitEvent::ParticipantAdded(id) => self.with_participant(id),
            SplitEvent::ParticipantRemoved(id) => self.without_participant(id),
            SplitEvent::ShareEdited { id, amount } => self.with_edit(id, *amount),
            SplitEvent::LockCleared(id) => self.without_lock(id),
            SplitEvent::ModeChanged(mode) => self.with_mode(*mode),
        }
    }

    /// Gate the current shares through the Validator.
    ///
    /// Succeeds only when the shares cover exactly the participant set and
    /// sum to the total; an overcommitted lock state surfaces here as
    /// `SumMismatch`.  The session itself is untouched either way.
    pub fn submit(&self) -> Result<ShareSet, SplitError> {
        let pset: BTreeSet<ParticipantId> = self.participants.iter().cloned().collect();
        let list: Vec<ShareInput> = self
            .shares
            .iter()
            .map(|(id, amount)| ShareInput::new(id.clone(), *amount))
            .collect();
        validate_shares(self.total, &pset, &list)
    }

    fn with_total(&self, total: Cents) -> Result<SplitSession, SplitError> {
        // Amount inputs disallow negative values; clamping keeps the
        // allocator's non-negative precondition regardless of the caller.
        let total = total.max(Cents::ZERO);
        let shares = match self.mode {
            SplitMode::Equal => equal_split(total, &self.participants)?,
            SplitMode::Custom => {
                reallocate_with_locks(total, &self.participants, &self.locks, &self.shares)?
            }
        };
        Ok(SplitSession {
            total,
            shares,
            ..self.clone()
        })
    }

    fn with_participant(&self, id: &ParticipantId) -> Result<SplitSession, SplitError> {
        if self.participants.contains(id) {
            return Err(SplitError::DuplicateParticipant { id: id.clone() });
        }
        let mut participants = self.participants.clone();
        participants.push(id.clone());
        let shares = match self.mode {
            SplitMode::Equal => equal_split(self.total, &participants)?,
            // The newcomer has no current value and no lock, so the
            // reconciler folds them into the unlocked pool.
            SplitMode::Custom => {
                reallocate_with_locks(self.total, &participants, &self.locks, &self.shares)?
            }
        };
        Ok(SplitSession {
            participants,
            shares,
            ..self.clone()
        })
    }

    fn without_participant(&self, id: &ParticipantId) -> Result<SplitSession, SplitError> {
        if !self.participants.contains(id) {
            return Ok(self.clone());
        }
        let participants: Vec<ParticipantId> = self
            .participants
            .iter()
            .filter(|p| *p != id)
            .cloned()
            .collect();
        let mut locks = self.locks.clone();
        locks.remove(id);
        let mut current = self.shares.clone();
        current.remove(id);

        let shares = match self.mode {
            SplitMode::Equal => equal_split(self.total, &participants)?,
            SplitMode::Custom => {
                reallocate_with_locks(self.total, &participants, &locks, &current)?
            }
        };
        Ok(SplitSession {
            participants,
            locks,
            shares,
            ..self.clone()
        })
    }

    fn with_edit(&self, id: &ParticipantId, amount: Cents) -> Result<SplitSession, SplitError> {
        if self.mode == SplitMode::Equal {
            // Per-participant inputs are disabled in Equal mode.
            return Ok(self.clone());
        }
        if !self.participants.contains(id) {
            return Err(SplitError::ParticipantMismatch {
                missing: vec![],
                unexpected: vec![id.clone()],
            });
        }

        // Clamp the edit to what the other locks leave available, so one
        // edit can never force the unlocked remainder negative.
        let mut locks = self.locks.clone();
        locks.remove(id);
        let other_locked: Cents = self
            .participants
            .iter()
            .filter(|p| locks.contains(*p))
            .fold(Cents::ZERO, |acc, p| {
                acc.saturating_add(self.shares.get(p).copied().unwrap_or(Cents::ZERO))
            });
        let available = self.total.saturating_sub(other_locked).max(Cents::ZERO);
        let capped = amount.max(Cents::ZERO).min(available);

        let mut current = self.shares.clone();
        current.insert(id.clone(), capped);
        locks.insert(id.clone());

        let shares = reallocate_with_locks(self.total, &self.participants, &locks, &current)?;
        Ok(SplitSession {
            locks,
            shares,
            ..self.clone()
        })
    }

    fn without_lock(&self, id: &ParticipantId) -> Result<SplitSession, SplitError> {
        if !self.locks.contains(id) {
            return Ok(self.clone());
        }
        let mut locks = self.locks.clone();
        locks.remove(id);
        let shares =
            reallocate_with_locks(self.total, &self.participants, &locks, &self.shares)?;
        Ok(SplitSession {
            locks,
            shares,
            ..self.clone()
        })
    }

    fn with_mode(&self, mode: SplitMode) -> Result<SplitSession, SplitError> {
        if mode == self.mode {
            return Ok(self.clone());
        }
        match mode {
            // Back to Equal: all locks are discarded and the Allocator
            // reseeds from scratch.
            SplitMode::Equal => {
                let shares = equal_split(self.total, &self.participants)?;
                Ok(SplitSession {
                    mode,
                    locks: BTreeSet::new(),
                    shares,
                    ..self.clone()
                })
            }
            // Into Custom: current shares become the editable baseline.
            SplitMode::Custom => Ok(SplitSession {
                mode,
                ..self.clone()
            }),
        }
    }
}
