//! Theme preference controller: restore on load, flip on click.
//!
//! DESIGN
//! ======
//! Two states, one transition. `initialize` projects the stored preference
//! onto the appliers once per page view; `toggle` inverts, re-applies, and
//! persists. Both run synchronously inside a single UI event, so the
//! in-memory theme, the applied surfaces, and storage agree whenever either
//! call returns.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures only cost cross-visit memory. They are logged and
//! otherwise ignored; the visual toggle always takes effect.

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use crate::state::theme::Theme;
use crate::util::theme_applier::ThemeApplier;
use crate::util::theme_store::ThemeStore;

/// Owns the theme state and the surfaces it is reflected onto.
pub struct ThemeController<S, A> {
    store: S,
    applier: A,
    current: Theme,
}

impl<S: ThemeStore, A: ThemeApplier> ThemeController<S, A> {
    /// Controller in the default (dark) state. Nothing is applied until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(store: S, applier: A) -> Self {
        Self { store, applier, current: Theme::default() }
    }

    /// Restore the persisted preference. Anything other than a stored
    /// `"light"` resolves to dark.
    pub fn initialize(&mut self) {
        let restored = match self.store.get() {
            Some(Theme::Light) => Theme::Light,
            Some(Theme::Dark) | None => Theme::Dark,
        };
        log::debug!("restored theme preference: {restored}");
        self.current = restored;
        self.applier.apply(restored);
    }

    /// Invert the theme, reflect it, and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.current = next;
        self.applier.apply(next);
        if let Err(e) = self.store.set(next) {
            log::warn!("theme preference not persisted: {e}");
        }
        next
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn applier(&self) -> &A {
        &self.applier
    }
}
