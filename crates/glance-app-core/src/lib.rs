// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application services for hosts of a Glance selection context.
//!
//! Persists the context's behaviour switches and highlight styles through a
//! storage-agnostic config service. Filesystem storage lives in
//! `glance-config-fs`.

pub mod config;
pub mod config_port;
pub mod prefs;
