//! Auth-state driven content gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed before the page is ready, so it races the first provider
//! callback. The main container stays hidden until a callback reports a
//! user; a signed-out callback on a protected page navigates to login.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::net::identity::IdentityProvider;
use crate::net::types::SessionUser;
use crate::state::auth::{AuthState, AuthView};
use crate::util::auth::redirect_target;

/// Result of one auth transition: what to show and where to go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateOutcome {
    pub view: AuthView,
    pub redirect: Option<String>,
}

/// Auth state plus the config it is resolved against.
#[derive(Debug)]
pub struct AuthGate {
    state: AuthState,
    config: Rc<AppConfig>,
}

impl AuthGate {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { state: AuthState::default(), config }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Apply a provider callback observed while on `current_path`.
    pub fn on_auth_change(&mut self, session: Option<&SessionUser>, current_path: &str) -> GateOutcome {
        self.state.apply_session(session, &self.config);
        let redirect = redirect_target(&self.state, current_path, &self.config);
        log::debug!(
            "auth transition: authenticated={} path={current_path} redirect={redirect:?}",
            self.state.is_authenticated()
        );
        GateOutcome { view: self.state.view(), redirect }
    }
}

/// Register the page's single auth observer.
///
/// Returns the shared gate so callers can inspect the latest state.
pub fn install<P>(provider: &P, config: Rc<AppConfig>) -> Rc<RefCell<AuthGate>>
where
    P: IdentityProvider + ?Sized,
{
    let gate = Rc::new(RefCell::new(AuthGate::new(config)));
    render(&gate.borrow().state().view());

    let observer_gate = Rc::clone(&gate);
    provider.subscribe(Box::new(move |session: Option<SessionUser>| {
        let outcome = observer_gate
            .borrow_mut()
            .on_auth_change(session.as_ref(), &current_path());
        render(&outcome.view);
        if let Some(target) = outcome.redirect {
            navigate(&target);
        }
    }));
    gate
}

/// Apply `view` to the main container and the user header.
pub fn render(view: &AuthView) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom;

        let Some(doc) = dom::document() else {
            return;
        };
        if let Ok(Some(container)) = doc.query_selector(dom::MAIN_CONTAINER_SELECTOR) {
            dom::set_visible(&container, view.content_visible);
        }
        if let Some(name) = &view.display_name {
            if let Some(el) = doc.get_element_by_id(dom::USER_NAME_ID) {
                el.set_text_content(Some(name));
            }
        }
        if let Some(url) = &view.avatar_url {
            if let Some(el) = doc.get_element_by_id(dom::USER_PHOTO_ID) {
                let _ = el.set_attribute("src", url);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
    }
}

fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::current_path()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("no active session; redirecting to {path}");
        crate::util::dom::navigate(path);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
