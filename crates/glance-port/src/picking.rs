// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Picking engine port: candidate owners under a point, box or lasso.

use crate::types::{OwnerId, PixelRect, View};

/// How the topmost detected owner is chosen during hover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickingStrategy {
    /// The first candidate accepted by the filters wins.
    #[default]
    FirstAcceptable,
    /// Only the nearest raw candidate may win; if any earlier candidate is
    /// rejected by the filters nothing is detected.
    OnlyTopmost,
}

/// Picking engine port trait.
///
/// Each `pick_*` call replaces the previous result. Results are ordered
/// nearest-first (highest priority, then smallest depth) and addressed by a
/// 1-based rank: valid ranks are `1..=nb_picked()`.
pub trait PickingEngine {
    /// Pick candidates under the pixel `(x, y)` of `view`.
    fn pick_point(&mut self, x: i32, y: i32, view: &View);

    /// Pick candidates inside `rect` of `view`.
    fn pick_rect(&mut self, rect: PixelRect, view: &View);

    /// Pick candidates inside the closed polyline `points` of `view`.
    fn pick_polyline(&mut self, points: &[[f64; 2]], view: &View);

    /// Number of candidates of the last pick.
    fn nb_picked(&self) -> usize;

    /// Owner at 1-based `rank` of the last pick.
    ///
    /// Returns `None` for an out-of-range rank or for a candidate with no
    /// attached owner.
    fn picked(&self, rank: usize) -> Option<OwnerId>;
}
