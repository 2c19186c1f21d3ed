//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::Window;

use super::url::{LinkTarget, classify_link};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Open an external URL in a new tab.
pub fn open_external(url: &str) {
    let Some(window) = window() else {
        log::warn!("cannot open {}: no window", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::debug!("opened {}", url),
        Ok(None) => log::warn!("popup blocked for {}", url),
        Err(e) => log::warn!("failed to open {}: {:?}", url, e),
    }
}

/// Hand a `mailto:` link to the browser's mail handler.
pub fn open_mail(href: &str) {
    let Some(window) = window() else {
        log::warn!("cannot open {}: no window", href);
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::warn!("failed to open {}: {:?}", href, e);
    }
}

/// Follow a validated link.
pub fn follow(target: &LinkTarget) {
    match target {
        LinkTarget::External(url) => open_external(url),
        LinkTarget::Mail(href) => open_mail(href),
        LinkTarget::Placeholder => log::debug!("ignoring placeholder link"),
    }
}

/// Validate `href` and follow it; invalid links are logged and dropped.
pub fn open_link(href: &str) {
    match classify_link(href) {
        Ok(target) => follow(&target),
        Err(e) => log::warn!("refusing to open {}: {}", href, e),
    }
}

/// Set a CSS custom property on the document element.
pub fn set_root_style_var(name: &str, value: &str) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    let Some(root) = root else {
        log::warn!("cannot set {}: no document element", name);
        return;
    };

    let style = match root.dyn_into::<web_sys::HtmlElement>() {
        Ok(el) => el.style(),
        Err(_) => {
            log::warn!("cannot set {}: document element is not HTML", name);
            return;
        }
    };

    if let Err(e) = style.set_property(name, value) {
        log::warn!("failed to set {}: {:?}", name, e);
    }
}
