//! Page boot sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load from the WASM start hook. The auth gate is
//! installed immediately so the first provider callback is never missed;
//! theme, navigation, and logout wiring wait for the document to be parsed.

use std::rc::Rc;

use crate::components::{auth_gate, logout_button, nav_links, theme_toggle};
use crate::config::AppConfig;
use crate::error::ErrorCode;
use crate::net::identity::FirebaseAuth;
use crate::util::dom;

/// Install every component for the current page.
pub fn boot() {
    let config = Rc::new(AppConfig::from_document());

    // Identity failures disable the gate and logout only.
    let provider = match FirebaseAuth::connect(config.identity.as_ref()) {
        Ok(provider) => {
            log::info!("identity provider connected");
            let provider = Rc::new(provider);
            auth_gate::install(provider.as_ref(), Rc::clone(&config));
            Some(provider)
        }
        Err(e) => {
            log::error!("[{}] {e}; auth gate disabled", e.error_code());
            None
        }
    };

    dom::on_ready(move || {
        nav_links::highlight(&config);
        theme_toggle::install(&config);
        if let Some(provider) = provider {
            logout_button::install(provider, config);
        }
    });
}
