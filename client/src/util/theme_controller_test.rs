use super::*;
use crate::util::theme_applier::RecordingApplier;
use crate::util::theme_store::MemoryThemeStore;

fn controller(store: MemoryThemeStore) -> ThemeController<MemoryThemeStore, RecordingApplier> {
    let mut c = ThemeController::new(store, RecordingApplier::default());
    c.initialize();
    c
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_controller_is_dark_and_applies_nothing() {
    let c = ThemeController::new(MemoryThemeStore::new(), RecordingApplier::default());
    assert_eq!(c.current(), Theme::Dark);
    assert!(c.applier().applied.is_empty());
}

#[test]
fn initialize_without_preference_is_dark() {
    let c = controller(MemoryThemeStore::new());
    assert_eq!(c.current(), Theme::Dark);
    assert_eq!(c.applier().last(), Some(Theme::Dark));
    assert_eq!(c.current().icon(), "🌙");
}

#[test]
fn initialize_with_light_preference_is_light() {
    let c = controller(MemoryThemeStore::with_raw("light"));
    assert_eq!(c.current(), Theme::Light);
    assert_eq!(c.applier().last(), Some(Theme::Light));
    assert_eq!(c.current().icon(), "☀️");
}

#[test]
fn initialize_with_dark_preference_is_dark() {
    let c = controller(MemoryThemeStore::with_raw("dark"));
    assert_eq!(c.current(), Theme::Dark);
}

#[test]
fn initialize_with_malformed_preference_is_dark() {
    for raw in ["", "Light", "1", "{\"theme\":\"light\"}"] {
        let c = controller(MemoryThemeStore::with_raw(raw));
        assert_eq!(c.current(), Theme::Dark, "raw value {raw:?}");
    }
}

#[test]
fn initialize_does_not_write_storage() {
    let store = MemoryThemeStore::new();
    let _c = controller(store.clone());
    assert_eq!(store.raw(), None);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_dark_persists_light() {
    let store = MemoryThemeStore::new();
    let mut c = controller(store.clone());
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(store.raw().as_deref(), Some("light"));
    assert_eq!(c.store().get(), Some(Theme::Light));
    assert_eq!(c.applier().last(), Some(Theme::Light));
    assert_eq!(c.current().icon(), "☀️");
}

#[test]
fn toggle_from_light_persists_dark() {
    let store = MemoryThemeStore::with_raw("light");
    let mut c = controller(store.clone());
    assert_eq!(c.toggle(), Theme::Dark);
    assert_eq!(store.raw().as_deref(), Some("dark"));
}

#[test]
fn even_toggles_restore_initial_state() {
    for start in ["light", "dark"] {
        let mut c = controller(MemoryThemeStore::with_raw(start));
        let initial = c.current();
        let initial_icon = c.current().icon();
        for _ in 0..6 {
            c.toggle();
        }
        assert_eq!(c.current(), initial);
        assert_eq!(c.current().icon(), initial_icon);
        assert_eq!(c.applier().last(), Some(initial));
    }
}

#[test]
fn n_toggles_from_dark_alternate_by_parity() {
    for n in 0..9 {
        let mut c = controller(MemoryThemeStore::new());
        for _ in 0..n {
            c.toggle();
        }
        let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(c.current(), expected, "after {n} toggles");
    }
}

#[test]
fn each_toggle_applies_exactly_once() {
    let mut c = controller(MemoryThemeStore::new());
    c.toggle();
    c.toggle();
    c.toggle();
    assert_eq!(
        c.applier().applied,
        vec![Theme::Dark, Theme::Light, Theme::Dark, Theme::Light]
    );
}

#[test]
fn state_applier_and_storage_agree_after_each_toggle() {
    let store = MemoryThemeStore::new();
    let mut c = controller(store.clone());
    for _ in 0..5 {
        let next = c.toggle();
        assert_eq!(c.current(), next);
        assert_eq!(c.applier().last(), Some(next));
        assert_eq!(store.get(), Some(next));
    }
}

// =============================================================
// reload round-trip
// =============================================================

#[test]
fn reload_restores_toggled_state() {
    let store = MemoryThemeStore::new();
    let mut first = controller(store.clone());
    let before = first.toggle();

    let reloaded = controller(store.clone());
    assert_eq!(reloaded.current(), before);
}

#[test]
fn reload_after_two_toggles_restores_dark() {
    let store = MemoryThemeStore::new();
    let mut first = controller(store.clone());
    first.toggle();
    first.toggle();

    let reloaded = controller(store);
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn reload_after_storage_cleared_is_dark() {
    let store = MemoryThemeStore::new();
    let mut first = controller(store.clone());
    first.toggle();
    store.clear();

    let reloaded = controller(store);
    assert_eq!(reloaded.current(), Theme::Dark);
}

// =============================================================
// storage failures
// =============================================================

#[test]
fn failed_write_still_toggles_visually() {
    let backing = MemoryThemeStore::new();
    let mut c = controller(backing.read_only());
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.applier().last(), Some(Theme::Light));
    assert_eq!(backing.raw(), None);
}

#[test]
fn failed_write_is_forgotten_on_reload() {
    let backing = MemoryThemeStore::new();
    let mut c = controller(backing.read_only());
    c.toggle();

    let reloaded = controller(backing);
    assert_eq!(reloaded.current(), Theme::Dark);
}
