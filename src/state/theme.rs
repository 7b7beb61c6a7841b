//! Color theme model.
//!
//! DESIGN
//! ======
//! `is_dark` is the only source of truth. The `<html>` marker class and both
//! icon visibilities are derived from it in [`ThemeView::for_theme`], so no
//! caller ever picks a class name on its own.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class placed on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";
/// Class that hides an icon element.
pub const HIDDEN_CLASS: &str = "hidden";

/// A named visual mode affecting root-level styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Effective theme: stored preference, then OS preference, then light.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or(Theme::from_dark(system_prefers_dark))
}

/// Everything the document shows for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    /// `DARK_CLASS` present on `<html>`.
    pub root_dark: bool,
    pub sun_visible: bool,
    pub moon_visible: bool,
}

impl ThemeView {
    pub fn for_theme(theme: Theme) -> Self {
        let dark = theme.is_dark();
        Self { root_dark: dark, sun_visible: !dark, moon_visible: dark }
    }

    #[cfg(test)]
    pub(crate) fn theme(self) -> Theme {
        Theme::from_dark(self.root_dark)
    }
}
