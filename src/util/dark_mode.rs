//! Theme resolution, persistence, and application.
//!
//! Reads the stored preference (falling back to the OS color-scheme media
//! query), applies the `.dark` class on `<html>` and swaps the sun/moon icon
//! visibility. Toggling writes the new value back to storage.
//!
//! TRADE-OFFS
//! ==========
//! The initial resolution is not persisted, so a user without an explicit
//! choice keeps following the OS preference on later visits. Only a toggle
//! records a preference.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::AppConfig;
use crate::state::theme::{Theme, ThemeView, resolve};
use crate::util::storage::PreferenceStore;

/// Owns the current theme and its storage location.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    legacy_keys: Vec<String>,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            key: config.theme_storage_key.clone(),
            legacy_keys: config.legacy_theme_keys.clone(),
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Resolve the effective theme without persisting it.
    pub fn init(&mut self, system_prefers_dark: bool) -> ThemeView {
        self.current = resolve(self.read_preference(), system_prefers_dark);
        ThemeView::for_theme(self.current)
    }

    /// Make `theme` current and persist it.
    pub fn select(&mut self, theme: Theme) -> ThemeView {
        self.current = theme;
        self.store.save(&self.key, theme.as_str());
        ThemeView::for_theme(theme)
    }

    pub fn toggle(&mut self) -> ThemeView {
        self.select(self.current.toggled())
    }

    /// Stored preference, migrating a legacy key to the primary key.
    ///
    /// Unparseable values count as absent, so a broken primary entry still
    /// falls through to the legacy keys.
    pub fn read_preference(&self) -> Option<Theme> {
        if let Some(theme) = self.store.load(&self.key).as_deref().and_then(Theme::parse) {
            return Some(theme);
        }
        for legacy in &self.legacy_keys {
            if let Some(theme) = self.store.load(legacy).as_deref().and_then(Theme::parse) {
                self.store.save(&self.key, theme.as_str());
                self.store.remove(legacy);
                return Some(theme);
            }
        }
        None
    }
}

/// Whether the OS reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply `view` to `<html>` and both theme icons.
pub fn apply(view: &ThemeView) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::theme::{DARK_CLASS, HIDDEN_CLASS};
        use crate::util::dom;

        let Some(doc) = dom::document() else {
            return;
        };
        if let Some(root) = doc.document_element() {
            dom::set_class(&root, DARK_CLASS, view.root_dark);
        }
        if let Some(sun) = doc.get_element_by_id(dom::THEME_ICON_SUN_ID) {
            dom::set_class(&sun, HIDDEN_CLASS, !view.sun_visible);
        }
        if let Some(moon) = doc.get_element_by_id(dom::THEME_ICON_MOON_ID) {
            dom::set_class(&moon, HIDDEN_CLASS, !view.moon_visible);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
    }
}
