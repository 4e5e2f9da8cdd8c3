//! Header button that flips between light and dark.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the page's single `ThemeController`, wired to `localStorage`, the
//! document class, and the shared theme signal the glyph is derived from.
//! The stored preference is restored once the app hydrates.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme_applier::DocumentClassApplier;
use crate::util::theme_controller::ThemeController;
use crate::util::theme_store::LocalStorageThemeStore;

/// Light/dark toggle with the current theme's glyph.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let controller = StoredValue::new_local(ThemeController::new(
        LocalStorageThemeStore,
        (DocumentClassApplier, theme),
    ));

    Effect::new(move || {
        controller.update_value(|c| c.initialize());
    });

    let on_toggle = move |_| {
        controller.update_value(|c| {
            c.toggle();
        });
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle aria-label="Toggle theme">
            <span class="theme-icon">{move || theme.get().icon()}</span>
        </button>
    }
}
