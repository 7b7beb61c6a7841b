use super::*;
use crate::util::storage::MemoryStore;

fn controller(store: MemoryStore) -> ThemeController<MemoryStore> {
    ThemeController::new(store, &AppConfig::default())
}

// =============================================================
// init
// =============================================================

#[test]
fn init_without_stored_follows_dark_system() {
    let mut ctl = controller(MemoryStore::default());
    let view = ctl.init(true);
    assert_eq!(ctl.current(), Theme::Dark);
    assert!(view.root_dark);
}

#[test]
fn init_stored_light_beats_dark_system() {
    let mut ctl = controller(MemoryStore::with_entry("theme", "light"));
    let view = ctl.init(true);
    assert_eq!(ctl.current(), Theme::Light);
    assert!(view.sun_visible);
    assert!(!view.moon_visible);
}

#[test]
fn init_does_not_persist_resolved_theme() {
    let mut ctl = controller(MemoryStore::default());
    ctl.init(true);
    assert_eq!(ctl.store.load("theme"), None);
}

#[test]
fn init_ignores_unknown_stored_value() {
    let mut ctl = controller(MemoryStore::with_entry("theme", "true"));
    ctl.init(false);
    assert_eq!(ctl.current(), Theme::Light);
}

// =============================================================
// Legacy key
// =============================================================

#[test]
fn legacy_key_is_read_and_migrated() {
    let mut ctl = controller(MemoryStore::with_entry("color-theme", "dark"));
    ctl.init(false);
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.store.load("theme").as_deref(), Some("dark"));
    assert_eq!(ctl.store.load("color-theme"), None);
}

#[test]
fn unparseable_primary_falls_back_to_legacy_key() {
    let store = MemoryStore::with_entry("theme", "bogus");
    store.save("color-theme", "dark");
    let mut ctl = controller(store);
    ctl.init(false);
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.store.load("theme").as_deref(), Some("dark"));
    assert_eq!(ctl.store.load("color-theme"), None);
}

#[test]
fn unparseable_primary_without_legacy_follows_system() {
    let mut ctl = controller(MemoryStore::with_entry("theme", "bogus"));
    ctl.init(true);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn primary_key_wins_over_legacy_key() {
    let store = MemoryStore::with_entry("color-theme", "dark");
    store.save("theme", "light");
    let mut ctl = controller(store);
    ctl.init(true);
    assert_eq!(ctl.current(), Theme::Light);
    assert_eq!(ctl.store.load("color-theme").as_deref(), Some("dark"));
}

// =============================================================
// select / toggle
// =============================================================

#[test]
fn select_persists_and_shows_matching_icon() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut ctl = controller(MemoryStore::default());
        let view = ctl.select(theme);
        assert_eq!(view.sun_visible, theme == Theme::Light);
        assert_eq!(view.moon_visible, theme == Theme::Dark);
        assert_ne!(view.sun_visible, view.moon_visible);
        assert_eq!(ctl.read_preference(), Some(theme));
    }
}

#[test]
fn toggle_flips_and_persists() {
    let mut ctl = controller(MemoryStore::default());
    ctl.init(false);
    let view = ctl.toggle();
    assert_eq!(view.theme(), Theme::Dark);
    assert_eq!(ctl.store.load("theme").as_deref(), Some("dark"));
    let view = ctl.toggle();
    assert_eq!(view.theme(), Theme::Light);
    assert_eq!(ctl.store.load("theme").as_deref(), Some("light"));
}

#[test]
fn custom_storage_key_is_used() {
    let config = AppConfig { theme_storage_key: "scholar-theme".to_owned(), ..AppConfig::default() };
    let mut ctl = ThemeController::new(MemoryStore::default(), &config);
    ctl.select(Theme::Dark);
    assert_eq!(ctl.store.load("scholar-theme").as_deref(), Some("dark"));
    assert_eq!(ctl.store.load("theme"), None);
}

// =============================================================
// Browser glue outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn system_preference_is_light_without_browser() {
    assert!(!system_prefers_dark());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_callable_for_both_themes() {
    apply(&ThemeView::for_theme(Theme::Light));
    apply(&ThemeView::for_theme(Theme::Dark));
}
