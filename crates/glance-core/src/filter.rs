// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selection filters: which detected owners may be highlighted or selected.

use std::collections::BTreeSet;

use glance_port::{ObjectId, OwnerId, SelectionMode};

/// What a filter knows about a candidate owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerInfo {
    /// Candidate owner.
    pub owner: OwnerId,
    /// Selection mode the owner was created for.
    pub mode: SelectionMode,
}

/// Accepts or rejects candidate owners.
pub trait SelectionFilter {
    /// Whether `candidate` may be detected or selected.
    fn is_ok(&self, candidate: &OwnerInfo) -> bool;
}

/// Accepts owners of the listed objects only.
#[derive(Clone, Debug, Default)]
pub struct ObjectFilter {
    objects: BTreeSet<ObjectId>,
}

impl ObjectFilter {
    /// Filter accepting the given objects.
    pub fn new(objects: impl IntoIterator<Item = ObjectId>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
        }
    }
}

impl SelectionFilter for ObjectFilter {
    fn is_ok(&self, candidate: &OwnerInfo) -> bool {
        self.objects.contains(&candidate.owner.object)
    }
}

/// Accepts owners created for the listed selection modes only.
#[derive(Clone, Debug, Default)]
pub struct ModeFilter {
    modes: BTreeSet<SelectionMode>,
}

impl ModeFilter {
    /// Filter accepting the given modes.
    pub fn new(modes: impl IntoIterator<Item = SelectionMode>) -> Self {
        Self {
            modes: modes.into_iter().collect(),
        }
    }
}

impl SelectionFilter for ModeFilter {
    fn is_ok(&self, candidate: &OwnerInfo) -> bool {
        self.modes.contains(&candidate.mode)
    }
}

/// The context's filter chain.
///
/// A candidate passes when its object is not disabled and either no filter is
/// installed or at least one filter accepts it.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn SelectionFilter>>,
    disabled: BTreeSet<ObjectId>,
}

impl FilterChain {
    /// Chain with no filters and nothing disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a filter.
    pub fn add(&mut self, filter: Box<dyn SelectionFilter>) {
        self.filters.push(filter);
    }

    /// Remove every filter (disabled objects are kept).
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Number of installed filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter is installed.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Replace the set of objects hidden from picking.
    pub fn set_disabled_objects(&mut self, objects: &BTreeSet<ObjectId>) {
        self.disabled.clone_from(objects);
    }

    /// Whether `candidate` passes the chain.
    pub fn is_ok(&self, candidate: &OwnerInfo) -> bool {
        if self.disabled.contains(&candidate.owner.object) {
            return false;
        }
        self.filters.is_empty() || self.filters.iter().any(|f| f.is_ok(candidate))
    }
}

impl core::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .field("disabled", &self.disabled)
            .finish()
    }
}
