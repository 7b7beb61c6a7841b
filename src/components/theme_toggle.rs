//! Light/dark toggle button.
//!
//! Needs the toggle button and both icons; if any is missing the whole
//! component stays inert and the page keeps its server-rendered theme.

use crate::config::AppConfig;

/// Resolve and apply the initial theme, then wire the toggle button.
pub fn install(config: &AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::util::dark_mode::{self, ThemeController};
        use crate::util::dom;
        use crate::util::storage::LocalStorage;

        let Some(button) = dom::by_id(dom::THEME_TOGGLE_ID) else {
            return;
        };
        if dom::by_id(dom::THEME_ICON_SUN_ID).is_none() || dom::by_id(dom::THEME_ICON_MOON_ID).is_none() {
            return;
        }

        let mut controller = ThemeController::new(LocalStorage, config);
        dark_mode::apply(&controller.init(dark_mode::system_prefers_dark()));
        log::debug!("theme resolved to {}", controller.current().as_str());

        let controller = Rc::new(RefCell::new(controller));
        dom::on_click(&button, move |_| {
            let view = controller.borrow_mut().toggle();
            dark_mode::apply(&view);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
