//! DOM contract and small `web-sys` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server templates render these ids and selectors. Any of them may be
//! missing on a given page; lookups return `Option` and callers skip the
//! work instead of reporting an error.

pub const THEME_TOGGLE_ID: &str = "theme-toggle-btn";
pub const THEME_ICON_SUN_ID: &str = "theme-icon-sun";
pub const THEME_ICON_MOON_ID: &str = "theme-icon-moon";
/// Starts `visibility: hidden` in the stylesheet until the first auth callback.
pub const MAIN_CONTAINER_SELECTOR: &str = ".main-canvas";
pub const USER_NAME_ID: &str = "user-name-header";
pub const USER_PHOTO_ID: &str = "user-photo-header";
pub const LOGOUT_BUTTON_ID: &str = "logout-btn";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, DocumentReadyState, Element, Event, HtmlElement};

    pub fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn by_id(id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    /// Add or remove `class` on `el`.
    pub fn set_class(el: &Element, class: &str, on: bool) {
        let class_list = el.class_list();
        if on {
            let _ = class_list.add_1(class);
        } else {
            let _ = class_list.remove_1(class);
        }
    }

    /// Set inline `visibility`, keeping layout space reserved either way.
    pub fn set_visible(el: &Element, visible: bool) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html
                .style()
                .set_property("visibility", if visible { "visible" } else { "hidden" });
        }
    }

    /// Pathname of the current page, empty if unavailable.
    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    /// Full navigation to `path`.
    pub fn navigate(path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    /// Run `f` once the document is parsed.
    pub fn on_ready(f: impl FnOnce() + 'static) {
        let Some(doc) = document() else {
            return;
        };
        if doc.ready_state() != DocumentReadyState::Loading {
            f();
            return;
        }
        let callback = Closure::once_into_js(f);
        let _ = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    }

    /// Attach a click listener that lives for the page lifetime.
    pub fn on_click(el: &Element, handler: impl FnMut(Event) + 'static) {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}
