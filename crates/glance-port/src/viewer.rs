// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Viewer port: lets the selection context request redraws without depending
//! on a specific windowing crate.

use crate::types::ViewerId;

/// Minimal redraw port for the viewer a selection context is bound to.
///
/// Implementations are expected to be cheap and typically forward to a
/// surface's redraw request.
pub trait ViewerPort {
    /// Identifier of this viewer; views of other viewers are rejected.
    fn id(&self) -> ViewerId;

    /// Redraw the persistent scene of every view.
    fn update(&mut self);

    /// Redraw only the immediate-mode layer.
    fn redraw_immediate(&mut self);
}
