// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted selection preferences: behaviour switches and highlight styles.

use glance_core::{ContextSettings, SelectionContext, StyleTable};
use glance_port::{
    HighlightKind, HighlightStyle, PickingEngine, PresentationManager, ViewerPort,
};
use serde::{Deserialize, Serialize};

/// Saved preferences for a selection context.
///
/// Fields missing from a stored blob take their defaults, so files written by
/// older builds keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionPrefs {
    /// Behaviour switches.
    pub behaviour: ContextSettings,
    /// Highlight styles.
    pub styles: StylePrefs,
}

impl SelectionPrefs {
    /// Snapshot the settings and styles of `ctx`.
    pub fn capture<P, K, V>(ctx: &SelectionContext<P, K, V>) -> Self
    where
        P: PresentationManager,
        K: PickingEngine,
        V: ViewerPort,
    {
        Self {
            behaviour: *ctx.settings(),
            styles: StylePrefs::from(ctx.styles()),
        }
    }

    /// Install these preferences on `ctx`.
    ///
    /// Existing highlights keep their old style until they are redrawn.
    pub fn apply<P, K, V>(&self, ctx: &mut SelectionContext<P, K, V>)
    where
        P: PresentationManager,
        K: PickingEngine,
        V: ViewerPort,
    {
        ctx.set_settings(self.behaviour);
        *ctx.styles_mut() = self.styles.to_table();
    }
}

/// One style per highlight kind, keyed by name in the stored blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePrefs {
    /// Hover feedback for whole objects.
    pub dynamic: HighlightStyle,
    /// Hover feedback for sub-entities.
    pub local_dynamic: HighlightStyle,
    /// Selection feedback for whole objects.
    pub selected: HighlightStyle,
    /// Selection feedback for sub-entities.
    pub local_selected: HighlightStyle,
    /// Dimmed feedback. Its transparency follows `selected` at use.
    pub sub_intensity: HighlightStyle,
}

impl Default for StylePrefs {
    fn default() -> Self {
        Self::from(&StyleTable::default())
    }
}

impl StylePrefs {
    fn slot(&self, kind: HighlightKind) -> &HighlightStyle {
        match kind {
            HighlightKind::Dynamic => &self.dynamic,
            HighlightKind::LocalDynamic => &self.local_dynamic,
            HighlightKind::Selected => &self.selected,
            HighlightKind::LocalSelected => &self.local_selected,
            HighlightKind::SubIntensity => &self.sub_intensity,
        }
    }

    /// Build a style table, clamping transparencies into `[0, 1]`.
    ///
    /// A NaN transparency, which JSON cannot carry but a hand-built value
    /// can, becomes opaque.
    pub fn to_table(&self) -> StyleTable {
        let mut table = StyleTable::new();
        for kind in HighlightKind::ALL {
            let mut style = *self.slot(kind);
            style.transparency = if style.transparency.is_nan() {
                0.0
            } else {
                style.transparency.clamp(0.0, 1.0)
            };
            table.set(kind, style);
        }
        table
    }
}

impl From<&StyleTable> for StylePrefs {
    fn from(table: &StyleTable) -> Self {
        Self {
            dynamic: *table.get(HighlightKind::Dynamic),
            local_dynamic: *table.get(HighlightKind::LocalDynamic),
            selected: *table.get(HighlightKind::Selected),
            local_selected: *table.get(HighlightKind::LocalSelected),
            sub_intensity: *table.get(HighlightKind::SubIntensity),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use glance_mock::{MockPresentation, MockViewer, ScriptedPicker};
    use glance_port::{DisplayMode, PickingStrategy, ViewerId};

    fn context() -> SelectionContext<MockPresentation, ScriptedPicker, MockViewer> {
        SelectionContext::new(
            MockPresentation::new(),
            ScriptedPicker::new(),
            MockViewer::new(ViewerId(0)),
        )
    }

    #[test]
    fn defaults_match_a_fresh_context() {
        let ctx = context();
        assert_eq!(SelectionPrefs::capture(&ctx), SelectionPrefs::default());
    }

    #[test]
    fn apply_installs_behaviour_and_styles() {
        let mut prefs = SelectionPrefs::default();
        prefs.behaviour.hilight_selected = true;
        prefs.behaviour.picking_strategy = PickingStrategy::OnlyTopmost;
        prefs.styles.selected = HighlightStyle::with_color([255, 0, 0, 255]);

        let mut ctx = context();
        prefs.apply(&mut ctx);

        assert!(ctx.settings().hilight_selected);
        assert_eq!(ctx.settings().picking_strategy, PickingStrategy::OnlyTopmost);
        assert_eq!(ctx.styles().get(HighlightKind::Selected).color, [255, 0, 0, 255]);
        assert_eq!(SelectionPrefs::capture(&ctx), prefs);
    }

    #[test]
    fn out_of_range_transparency_is_clamped() {
        let mut styles = StylePrefs::default();
        styles.dynamic.transparency = 3.5;
        styles.selected.transparency = -1.0;
        styles.local_dynamic.transparency = f32::NAN;

        let table = styles.to_table();

        assert!((table.get(HighlightKind::Dynamic).transparency - 1.0).abs() < f32::EPSILON);
        assert!(table.get(HighlightKind::Selected).transparency.abs() < f32::EPSILON);
        assert!(table.get(HighlightKind::LocalDynamic).transparency.abs() < f32::EPSILON);
    }

    #[test]
    fn partial_blob_fills_missing_fields_with_defaults() {
        let json = r#"{ "behaviour": { "auto_hilight": false }, "styles": { "selected": { "color": [1, 2, 3, 255], "transparency": 0.25, "display_mode": 4 } } }"#;

        let prefs: SelectionPrefs = serde_json::from_str(json).unwrap();

        assert!(!prefs.behaviour.auto_hilight);
        assert!(prefs.behaviour.activate_on_display);
        assert_eq!(prefs.behaviour.default_display_mode, DisplayMode(0));
        assert_eq!(prefs.styles.selected.color, [1, 2, 3, 255]);
        assert_eq!(prefs.styles.selected.display_mode, Some(DisplayMode(4)));
        assert_eq!(prefs.styles.dynamic, StylePrefs::default().dynamic);
    }
}
