// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier and view types shared by every port.
//!
//! These types are plain handles with no behavior. Object handles are assigned
//! by the selection context at registration time and are never reused.

use alloc::collections::BTreeSet;

/// Handle of a selectable object registered with a selection context.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u32);

/// Handle of one entity owner: the owner at `index` in its object's owner list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerId {
    /// Object owning this entity.
    pub object: ObjectId,
    /// Position of the owner inside [`crate::Selectable::owners`].
    pub index: u32,
}

impl OwnerId {
    /// Build an owner handle from its object and index.
    pub const fn new(object: ObjectId, index: u32) -> Self {
        Self { object, index }
    }
}

/// Identifier of a viewer (a set of views sharing one scene).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerId(pub u32);

/// Identifier of one view of a viewer.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u32);

/// Presentation (display) mode of an object, e.g. wireframe or shaded.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayMode(pub i32);

/// Selection mode of an object, e.g. whole object, faces or edges.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionMode(pub i32);

/// Pixel-space rectangle used for box selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Minimum x (inclusive).
    pub x_min: i32,
    /// Minimum y (inclusive).
    pub y_min: i32,
    /// Maximum x (inclusive).
    pub x_max: i32,
    /// Maximum y (inclusive).
    pub y_max: i32,
}

impl PixelRect {
    /// Build a rectangle from two corners given in any order.
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            x_min: a.0.min(b.0),
            y_min: a.1.min(b.1),
            x_max: a.0.max(b.0),
            y_max: a.1.max(b.1),
        }
    }

    /// Whether the pixel `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// A view of a viewer, as seen by the selection context.
///
/// Objects listed in `hidden` are invisible in this view and must not be
/// detected or selected through it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
    /// View identifier.
    pub id: ViewId,
    /// Viewer this view belongs to.
    pub viewer: ViewerId,
    /// Objects hidden in this view only.
    pub hidden: BTreeSet<ObjectId>,
}

impl View {
    /// Create a view of `viewer` with no hidden objects.
    pub fn new(id: ViewId, viewer: ViewerId) -> Self {
        Self {
            id,
            viewer,
            hidden: BTreeSet::new(),
        }
    }

    /// Hide `object` in this view.
    pub fn hide(&mut self, object: ObjectId) {
        self.hidden.insert(object);
    }
}
