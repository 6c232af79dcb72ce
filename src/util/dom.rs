//! Document and window access.
//!
//! Applies the theme and language to `<html>` and reads the few window
//! metrics the widgets need. Without the `csr` feature every reader returns
//! a fixed desktop-sized value and every writer is a no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

use crate::state::nav::SectionBounds;
use crate::state::prefs::{Language, Theme};

/// Viewport width reported when no window is available.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;
/// Local hour reported when no clock is available.
pub const FALLBACK_HOUR: u32 = 12;

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Set `data-theme` on the document root.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = root_element() {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Set `lang` on the document root.
pub fn apply_language(language: Language) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = root_element() {
            let _ = el.set_attribute("lang", language.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = language;
    }
}

/// Hour of day in the browser's local time zone.
pub fn local_hour() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_HOUR
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smoothly scroll the window to `top` pixels.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = top;
    }
}

/// `offsetTop` of the element with `id`, if it exists.
pub fn offset_top(id: &str) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let el = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Geometry of every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(list) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector_all("section[id]").ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}
