//! Identity provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider SDK is a trusted collaborator. This layer only subscribes to
//! its auth-state observer and asks it to sign out; token issuance and
//! verification happen elsewhere. [`FirebaseAuth`] talks to the SDK through
//! the `js/identity.js` shim; tests substitute a mock.

#[cfg(test)]
#[path = "identity_mock.rs"]
pub(crate) mod mock;

use crate::error::GlueError;
use crate::net::types::SessionUser;

/// Callback fired on every auth transition with the current user, if any.
pub type AuthObserver = Box<dyn Fn(Option<SessionUser>)>;

/// Provider-neutral auth operations. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Register a persistent observer. Fires immediately with the current
    /// state, then on sign-in, sign-out and token refresh.
    fn subscribe(&self, observer: AuthObserver);

    /// End the provider session.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::SignOut`] if the provider rejects the request.
    async fn sign_out(&self) -> Result<(), GlueError>;
}

#[cfg(feature = "hydrate")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/identity.js")]
    extern "C" {
        #[wasm_bindgen(js_name = initIdentity, catch)]
        pub fn init_identity(config: JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(js_name = onAuthStateChanged)]
        pub fn on_auth_state_changed(callback: &Closure<dyn FnMut(JsValue)>);

        #[wasm_bindgen(js_name = signOut)]
        pub fn sign_out() -> js_sys::Promise;
    }
}

/// Firebase Auth client bound to the page's Firebase app.
#[derive(Debug)]
pub struct FirebaseAuth {
    _private: (),
}

impl FirebaseAuth {
    /// Initialize the SDK with `identity`, or reuse the page's already
    /// initialized default app when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::ProviderUnavailable`] if the SDK cannot be set up.
    pub fn connect(identity: Option<&crate::config::IdentityConfig>) -> Result<Self, GlueError> {
        #[cfg(feature = "hydrate")]
        {
            let config = match identity {
                Some(identity) => {
                    let raw = serde_json::to_string(identity).map_err(|e| GlueError::ProviderUnavailable(e.to_string()))?;
                    js_sys::JSON::parse(&raw).map_err(|e| GlueError::ProviderUnavailable(describe_js_error(&e)))?
                }
                None => wasm_bindgen::JsValue::NULL,
            };
            ffi::init_identity(config).map_err(|e| GlueError::ProviderUnavailable(describe_js_error(&e)))?;
            Ok(Self { _private: () })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
            Err(GlueError::ProviderUnavailable("not available outside the browser".to_owned()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FirebaseAuth {
    fn subscribe(&self, observer: AuthObserver) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::prelude::*;

            let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                observer(user_from_js(&value));
            });
            ffi::on_auth_state_changed(&callback);
            // The observer lives for the page lifetime.
            callback.forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = observer;
        }
    }

    async fn sign_out(&self) -> Result<(), GlueError> {
        #[cfg(feature = "hydrate")]
        {
            wasm_bindgen_futures::JsFuture::from(ffi::sign_out())
                .await
                .map(|_| ())
                .map_err(|e| GlueError::SignOut(describe_js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(GlueError::SignOut("not available outside the browser".to_owned()))
        }
    }
}

/// Convert the shim's user object (or `null`) into a [`SessionUser`].
///
/// A present but unreadable user keeps the session with empty fields so the
/// page shows fallbacks instead of redirecting a signed-in user.
#[cfg(feature = "hydrate")]
fn user_from_js(value: &wasm_bindgen::JsValue) -> Option<SessionUser> {
    use crate::error::ErrorCode;

    if value.is_null() || value.is_undefined() {
        return None;
    }
    let raw = js_sys::JSON::stringify(value).ok().map(String::from).unwrap_or_default();
    match SessionUser::from_json(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("[{}] {e}", e.error_code());
            Some(SessionUser::default())
        }
    }
}

#[cfg(feature = "hydrate")]
fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
