//! Unauthenticated redirect rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page except the public login page is protected. A signed-out
//! callback on a protected page becomes a full navigation to the login path;
//! on the login page itself it is a no-op.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::util::nav::normalize_path;

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where to send the browser after a state transition, if anywhere.
pub fn redirect_target(state: &AuthState, current_path: &str, config: &AppConfig) -> Option<String> {
    if !should_redirect_unauth(state) {
        return None;
    }
    if normalize_path(current_path) == normalize_path(&config.login_path) {
        return None;
    }
    Some(config.login_path.clone())
}
