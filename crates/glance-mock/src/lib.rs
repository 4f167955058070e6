// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless adapters for testing the Glance selection context.
//!
//! This crate provides:
//! - [`MockPresentation`], a presentation manager that tracks what is drawn
//! - [`ScriptedPicker`], a picking engine answering from scripted candidates
//! - [`MockViewer`], a viewer counting redraw requests
//!
//! None of them renders anything.

mod picker;
mod presentation;
mod viewer;

pub use picker::ScriptedPicker;
pub use presentation::{MockPresentation, PresentationCall};
pub use viewer::MockViewer;
