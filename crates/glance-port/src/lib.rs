// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port contracts for the Glance selection context.
//!
//! This crate defines the seams between the selection context and the host
//! application: what a selectable object looks like, how candidates are
//! picked, how highlights are drawn and how the viewer is asked to redraw.
//! It contains NO selection logic; that lives in glance-core.
//!
//! # Design Principles
//!
//! - **Adapters are dumb**: Picking engines return ordered candidates and
//!   presentation managers draw what they are told. No selection state.
//! - **Handles, not pointers**: Objects and owners are addressed by
//!   [`ObjectId`] / [`OwnerId`] assigned by the context.
//! - **Redraw is explicit**: Nothing here redraws on its own; the context
//!   decides when [`ViewerPort::update`] runs.
//!
//! # Crate Features
//!
//! - `std` (default): Enables std library. Disable for no_std contexts.
//! - `serde`: Serialize/deserialize ids and highlight styles.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod owner;
mod picking;
mod presentation;
mod selectable;
mod style;
mod types;
mod viewer;

pub use owner::EntityOwner;
pub use picking::{PickingEngine, PickingStrategy};
pub use presentation::{ImmediateDraw, PresentationManager};
pub use selectable::Selectable;
pub use style::{ColorRgba8, HighlightKind, HighlightStyle};
pub use types::{
    DisplayMode, ObjectId, OwnerId, PixelRect, SelectionMode, View, ViewId, ViewerId,
};
pub use viewer::ViewerPort;
