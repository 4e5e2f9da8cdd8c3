//! Output surfaces that reflect the active theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! A theme change touches two places: the `light` class on `<html>` (which
//! every themed rule in the stylesheet keys off) and the glyph inside the
//! toggle button. Each is a `ThemeApplier`; the controller is handed both,
//! resolved once at construction, instead of querying the DOM per click.

#[cfg(test)]
#[path = "theme_applier_test.rs"]
mod theme_applier_test;

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Class present on the document element while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

/// Something that renders a theme.
pub trait ThemeApplier {
    fn apply(&mut self, theme: Theme);
}

/// Toggles [`LIGHT_CLASS`] on `document.documentElement`.
///
/// No-op outside the `hydrate` build so SSR output stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentClassApplier;

impl ThemeApplier for DocumentClassApplier {
    fn apply(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if let Err(e) = root.class_list().toggle_with_force(LIGHT_CLASS, theme.is_light()) {
                log::warn!("failed to set document theme class: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Reactive theme signal; the toggle icon is derived from it.
impl ThemeApplier for RwSignal<Theme> {
    fn apply(&mut self, theme: Theme) {
        self.set(theme);
    }
}

/// Applies to both surfaces, first then second.
impl<A: ThemeApplier, B: ThemeApplier> ThemeApplier for (A, B) {
    fn apply(&mut self, theme: Theme) {
        self.0.apply(theme);
        self.1.apply(theme);
    }
}

/// Test double that records every theme it is asked to apply.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingApplier {
    pub applied: Vec<Theme>,
}

#[cfg(test)]
impl RecordingApplier {
    pub fn last(&self) -> Option<Theme> {
        self.applied.last().copied()
    }
}

#[cfg(test)]
impl ThemeApplier for RecordingApplier {
    fn apply(&mut self, theme: Theme) {
        self.applied.push(theme);
    }
}
