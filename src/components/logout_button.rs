//! Logout control.
//!
//! ERROR HANDLING
//! ==============
//! A failed provider sign-out is logged and the user stays on the page with
//! the session untouched; clicking again is the retry. Failing to clear the
//! server session after a successful sign-out only logs a warning.

#[cfg(test)]
#[path = "logout_button_test.rs"]
mod logout_button_test;

use std::rc::Rc;

use crate::config::AppConfig;
use crate::error::{ErrorCode, GlueError};
use crate::net::api;
use crate::net::identity::IdentityProvider;

/// Sign out and return the path to navigate to.
///
/// # Errors
///
/// Returns the provider's [`GlueError::SignOut`] unchanged; no redirect
/// should follow.
pub async fn perform_logout<P>(provider: &P, config: &AppConfig) -> Result<String, GlueError>
where
    P: IdentityProvider + ?Sized,
{
    if let Err(e) = provider.sign_out().await {
        log::error!("[{}] {e}", e.error_code());
        return Err(e);
    }
    if let Err(e) = api::end_server_session(&config.logout_path).await {
        log::warn!("[{}] {e}", e.error_code());
    }
    Ok(config.login_path.clone())
}

/// Wire the logout control, if the page has one.
pub fn install<P>(provider: Rc<P>, config: Rc<AppConfig>)
where
    P: IdentityProvider + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom;

        let Some(button) = dom::by_id(dom::LOGOUT_BUTTON_ID) else {
            return;
        };
        dom::on_click(&button, move |ev| {
            ev.prevent_default();
            let provider = Rc::clone(&provider);
            let config = Rc::clone(&config);
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(target) = perform_logout(provider.as_ref(), &config).await {
                    dom::navigate(&target);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, config);
    }
}
