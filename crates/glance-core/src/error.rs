// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for selection context operations.

use glance_port::{ObjectId, ViewerId};
use thiserror::Error;

/// Caller-contract violations reported by [`crate::SelectionContext`].
///
/// "Nothing detected" and "nothing selected" are never errors; they are
/// reported through [`crate::DetectionStatus`] and [`crate::PickStatus`].
/// An operation returning an error has changed no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The view passed to `op` belongs to another viewer than the context's.
    #[error("{op}: invalid argument, view of viewer {found:?} used with context bound to {expected:?}")]
    InvalidView {
        /// Operation that rejected the view.
        op: &'static str,
        /// Viewer the context is bound to.
        expected: ViewerId,
        /// Viewer of the rejected view.
        found: ViewerId,
    },
    /// The object handle is not registered with this context.
    #[error("unknown object {0:?}")]
    UnknownObject(ObjectId),
}
