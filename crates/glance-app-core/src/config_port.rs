// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port for selection preferences.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::SelectionPrefs;

/// Key the selection preferences are stored under.
pub const SELECTION_PREFS_KEY: &str = "selection";

/// Config-facing port for loading and saving selection preferences.
pub trait ConfigPort {
    /// Load the preferences; `None` when missing or unreadable.
    fn load_prefs(&self) -> Option<SelectionPrefs>;
    /// Persist the preferences. Best-effort: failures are logged, not returned.
    fn save_prefs(&self, prefs: &SelectionPrefs);
}

impl<S: ConfigStore> ConfigPort for ConfigService<S> {
    fn load_prefs(&self) -> Option<SelectionPrefs> {
        self.load(SELECTION_PREFS_KEY).unwrap_or_else(|err| {
            warn!(%err, key = SELECTION_PREFS_KEY, "selection prefs unreadable");
            None
        })
    }

    fn save_prefs(&self, prefs: &SelectionPrefs) {
        if let Err(err) = self.save(SELECTION_PREFS_KEY, prefs) {
            warn!(%err, key = SELECTION_PREFS_KEY, "failed to save selection prefs");
        }
    }
}
