//! Active navigation link highlighting.
//!
//! Purely additive: links only ever gain the active class, and re-running
//! marks the same set.

use crate::config::AppConfig;

/// Mark every `.nav-link` anchor that targets the current page.
pub fn highlight(config: &AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlAnchorElement;

        use crate::util::dom;
        use crate::util::nav::mark_active_links;

        let Some(doc) = dom::document() else {
            return;
        };
        let Ok(nodes) = doc.query_selector_all(dom::NAV_LINK_SELECTOR) else {
            return;
        };
        let anchors: Vec<HtmlAnchorElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlAnchorElement>().ok())
            .collect();
        mark_active_links(&anchors, &dom::current_path(), &config.dashboard_path);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "hydrate")]
impl crate::util::nav::NavLink for web_sys::HtmlAnchorElement {
    fn path(&self) -> String {
        self.pathname()
    }

    // `DOMTokenList.add` ignores classes already present.
    fn add_class(&self, class: &str) {
        let el: &web_sys::Element = self.as_ref();
        crate::util::dom::set_class(el, class, true);
    }
}
