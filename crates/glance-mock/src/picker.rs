// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted picking engine.

use std::collections::BTreeMap;

use glance_port::{ObjectId, OwnerId, PickingEngine, PixelRect, View, ViewId};

/// Picking engine answering from scripted candidate lists.
///
/// Candidates are given nearest first, as a real engine would sort them.
/// Objects hidden in the queried view are dropped from the answer, which
/// mirrors engines that honour per-view visibility themselves; the selection
/// context filters them again either way.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    points: BTreeMap<(i32, i32), Vec<OwnerId>>,
    rects: Vec<(PixelRect, Vec<OwnerId>)>,
    polyline: Vec<OwnerId>,
    picked: Vec<OwnerId>,
    honour_hidden: bool,
    /// Number of pick queries received.
    pub pick_count: usize,
    /// View of the last pick query.
    pub last_view: Option<ViewId>,
}

impl ScriptedPicker {
    /// Create a picker that finds nothing anywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `owners` for the point `(x, y)`.
    pub fn at(mut self, x: i32, y: i32, owners: impl IntoIterator<Item = OwnerId>) -> Self {
        self.set_point(x, y, owners);
        self
    }

    /// Answer `owners` for the point `(x, y)`.
    pub fn set_point(&mut self, x: i32, y: i32, owners: impl IntoIterator<Item = OwnerId>) {
        self.points.insert((x, y), owners.into_iter().collect());
    }

    /// Answer `owners` for exactly `rect`.
    pub fn set_rect(&mut self, rect: PixelRect, owners: impl IntoIterator<Item = OwnerId>) {
        let owners = owners.into_iter().collect();
        match self.rects.iter_mut().find(|(r, _)| *r == rect) {
            Some((_, existing)) => *existing = owners,
            None => self.rects.push((rect, owners)),
        }
    }

    /// Answer `owners` for any polyline.
    pub fn set_polyline(&mut self, owners: impl IntoIterator<Item = OwnerId>) {
        self.polyline = owners.into_iter().collect();
    }

    /// Drop candidates of objects hidden in the queried view.
    pub fn honour_hidden(mut self, on: bool) -> Self {
        self.honour_hidden = on;
        self
    }

    fn answer(&mut self, owners: Vec<OwnerId>, view: &View) {
        self.pick_count += 1;
        self.last_view = Some(view.id);
        let hidden = |object: &ObjectId| self.honour_hidden && view.hidden.contains(object);
        self.picked = owners.into_iter().filter(|o| !hidden(&o.object)).collect();
    }
}

impl PickingEngine for ScriptedPicker {
    fn pick_point(&mut self, x: i32, y: i32, view: &View) {
        let owners = self.points.get(&(x, y)).cloned().unwrap_or_default();
        self.answer(owners, view);
    }

    fn pick_rect(&mut self, rect: PixelRect, view: &View) {
        let owners = self
            .rects
            .iter()
            .find(|(r, _)| *r == rect)
            .map(|(_, owners)| owners.clone())
            .unwrap_or_default();
        self.answer(owners, view);
    }

    fn pick_polyline(&mut self, points: &[[f64; 2]], view: &View) {
        let owners = if points.len() >= 3 {
            self.polyline.clone()
        } else {
            Vec::new()
        };
        self.answer(owners, view);
    }

    fn nb_picked(&self) -> usize {
        self.picked.len()
    }

    fn picked(&self, rank: usize) -> Option<OwnerId> {
        rank.checked_sub(1).and_then(|i| self.picked.get(i)).copied()
    }
}
