// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered set of the selected owners of one viewer.

use glance_port::OwnerId;
use rustc_hash::FxHashSet;

/// Outcome of a single-owner selection-set mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectStatus {
    /// The owner was inserted.
    Added,
    /// The owner was removed.
    Removed,
    /// The set was left unchanged.
    NotDone,
}

/// Selected owners in selection order, each at most once.
///
/// The set only stores handles; keeping the owners' `selected` flags in sync
/// is the selection context's job.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    order: Vec<OwnerId>,
    members: FxHashSet<OwnerId>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `owner`: insert it when absent, remove it when present.
    pub fn select(&mut self, owner: OwnerId) -> SelectStatus {
        if self.members.remove(&owner) {
            self.order.retain(|o| *o != owner);
            SelectStatus::Removed
        } else {
            self.members.insert(owner);
            self.order.push(owner);
            SelectStatus::Added
        }
    }

    /// Insert `owner` if absent; never removes.
    pub fn add_select(&mut self, owner: OwnerId) -> SelectStatus {
        if self.members.insert(owner) {
            self.order.push(owner);
            SelectStatus::Added
        } else {
            SelectStatus::NotDone
        }
    }

    /// Remove `owner` if present.
    pub fn remove(&mut self, owner: OwnerId) -> SelectStatus {
        if self.members.remove(&owner) {
            self.order.retain(|o| *o != owner);
            SelectStatus::Removed
        } else {
            SelectStatus::NotDone
        }
    }

    /// Replace the whole selection by `owner`.
    pub fn clear_and_select(&mut self, owner: OwnerId) {
        self.clear();
        self.add_select(owner);
    }

    /// Drop every owner.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Whether `owner` is selected.
    pub fn contains(&self, owner: OwnerId) -> bool {
        self.members.contains(&owner)
    }

    /// Number of selected owners.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First selected owner.
    pub fn first(&self) -> Option<OwnerId> {
        self.order.first().copied()
    }

    /// Selected owners in selection order.
    pub fn iter(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot of the selection, for iterating while mutating the context.
    pub fn to_vec(&self) -> Vec<OwnerId> {
        self.order.clone()
    }
}
