//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Driven solely by identity-provider callbacks. The page starts `loading`
//! with the main container hidden and leaves that phase on the first
//! callback. There is no terminal state; the observer lives as long as the
//! page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::AppConfig;
use crate::net::types::SessionUser;
use crate::util::avatar::generated_avatar_url;

/// Display-ready projection of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserView {
    pub display_name: String,
    pub avatar_url: String,
}

impl UserView {
    /// Resolve display fallbacks: placeholder name, generated avatar.
    pub fn from_session(user: &SessionUser, config: &AppConfig) -> Self {
        let display_name = user
            .display_name()
            .map_or_else(|| config.fallback_name.clone(), str::to_owned);
        let avatar_url = user
            .photo_url()
            .map_or_else(|| generated_avatar_url(&display_name, &config.avatar), str::to_owned);
        Self { display_name, avatar_url }
    }
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserView>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Pending: no callback has resolved yet.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Apply one provider callback.
    pub fn apply_session(&mut self, session: Option<&SessionUser>, config: &AppConfig) {
        self.loading = false;
        self.user = session.map(|user| UserView::from_session(user, config));
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    pub fn view(&self) -> AuthView {
        let user = self.user.as_ref().filter(|_| !self.loading);
        AuthView {
            content_visible: user.is_some(),
            display_name: user.map(|u| u.display_name.clone()),
            avatar_url: user.map(|u| u.avatar_url.clone()),
        }
    }
}

/// What the auth-dependent parts of the page show.
///
/// `None` fields leave the corresponding element untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthView {
    pub content_visible: bool,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}
