// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hover detection state and the cyclic detection cursor.

use glance_port::{ObjectId, OwnerId};

/// One accepted candidate of the last hover pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detected {
    /// 1-based rank in the picking engine's result at pick time.
    pub rank: usize,
    /// Owner at that rank.
    pub owner: OwnerId,
}

/// What the last hover pick found.
///
/// The sequence is rebuilt by every hover pick; the cursor walks it without
/// picking again. Cursor positions are 1-based, 0 meaning "before the first".
#[derive(Clone, Debug, Default)]
pub struct DetectionState {
    last_picked: Option<OwnerId>,
    sequence: Vec<Detected>,
    current: usize,
}

impl DetectionState {
    /// No detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner detected last, either by a hover pick or by moving the cursor.
    pub fn last_picked(&self) -> Option<OwnerId> {
        self.last_picked
    }

    /// Replace the detected owner.
    pub fn set_last_picked(&mut self, owner: Option<OwnerId>) {
        self.last_picked = owner;
    }

    /// Drop the sequence and rewind the cursor; the detected owner is kept.
    pub fn reset_sequence(&mut self) {
        self.sequence.clear();
        self.current = 0;
    }

    /// Append an accepted candidate.
    pub fn push(&mut self, rank: usize, owner: OwnerId) {
        self.sequence.push(Detected { rank, owner });
    }

    /// Put the cursor on the first candidate.
    pub fn rewind_to_first(&mut self) {
        self.current = usize::from(!self.sequence.is_empty());
    }

    /// Accepted candidates in picking order.
    pub fn sequence(&self) -> &[Detected] {
        &self.sequence
    }

    /// Cursor position (1-based, 0 when not on a candidate).
    pub fn current(&self) -> usize {
        self.current
    }

    /// Candidate under the cursor.
    pub fn current_entry(&self) -> Option<Detected> {
        self.current
            .checked_sub(1)
            .and_then(|i| self.sequence.get(i))
            .copied()
    }

    /// Advance the cursor, wrapping past the end to the first candidate.
    pub fn advance(&mut self) -> Option<Detected> {
        if self.sequence.is_empty() {
            return None;
        }
        self.current += 1;
        if self.current > self.sequence.len() {
            self.current = 1;
        }
        self.current_entry()
    }

    /// Move the cursor back, wrapping before the first to the last candidate.
    pub fn retreat(&mut self) -> Option<Detected> {
        if self.sequence.is_empty() {
            return None;
        }
        self.current = match self.current {
            0 | 1 => self.sequence.len(),
            n => n - 1,
        };
        self.current_entry()
    }

    /// Forget every trace of `object` (erased or removed).
    pub fn forget_object(&mut self, object: ObjectId) {
        if self.last_picked.is_some_and(|o| o.object == object) {
            self.last_picked = None;
        }
        self.forget_where(|o| o.object == object);
    }

    /// Forget the listed owners (deactivated selection mode).
    pub fn forget_owners(&mut self, owners: &[OwnerId]) {
        if self.last_picked.is_some_and(|o| owners.contains(&o)) {
            self.last_picked = None;
        }
        self.forget_where(|o| owners.contains(&o));
    }

    fn forget_where(&mut self, gone: impl Fn(OwnerId) -> bool) {
        let before = self.sequence.len();
        self.sequence.retain(|d| !gone(d.owner));
        if self.sequence.len() != before {
            self.current = self.current.min(self.sequence.len());
        }
    }
}
