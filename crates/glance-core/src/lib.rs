// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interactive selection and highlight context for 3D viewers.
//!
//! [`SelectionContext`] sits between user input and rendering. Given cursor
//! positions and regions it asks a picking engine what lies underneath,
//! filters the candidates, keeps the detected and selected sets, and drives a
//! presentation manager to draw hover and selection feedback.
//!
//! Picking, drawing and the viewer are reached through the traits of
//! `glance-port`, so the context itself owns no geometry and no GPU state.
//!
//! # Crate Features
//!
//! - `serde`: derive serde for [`ContextSettings`] and [`StyleTable`].

#![forbid(unsafe_code)]

mod context;
mod detection;
mod error;
mod filter;
mod object;
mod selection;
mod settings;
mod status;
mod style;

pub use context::SelectionContext;
pub use detection::{Detected, DetectionState};
pub use error::SelectionError;
pub use filter::{FilterChain, ModeFilter, ObjectFilter, OwnerInfo, SelectionFilter};
pub use object::InteractiveObject;
pub use selection::{SelectStatus, SelectionSet};
pub use settings::ContextSettings;
pub use status::{DetectionStatus, GlobalStatus, GlobalStatusTable, GraphicStatus, PickStatus};
pub use style::{hilight_mode, StyleTable};
