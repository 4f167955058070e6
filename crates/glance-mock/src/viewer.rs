// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock viewer.

use glance_port::{ViewerId, ViewerPort};

/// Viewer that only counts redraw requests.
#[derive(Debug, Default)]
pub struct MockViewer {
    id: ViewerId,
    /// Number of full updates requested.
    pub update_count: u32,
    /// Number of immediate-layer redraws requested.
    pub redraw_immediate_count: u32,
}

impl MockViewer {
    /// Create a viewer with identifier `id`.
    pub fn new(id: ViewerId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl ViewerPort for MockViewer {
    fn id(&self) -> ViewerId {
        self.id
    }

    fn update(&mut self) {
        self.update_count += 1;
    }

    fn redraw_immediate(&mut self) {
        self.redraw_immediate_count += 1;
    }
}
