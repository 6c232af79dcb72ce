//! Scroll-driven navbar state: active section and background shadow.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Section ids in navbar order.
pub const NAV_SECTIONS: [&str; 5] = ["home", "blog", "projects", "services", "contact"];

/// Above this scroll offset the page counts as "at the top".
pub const HOME_THRESHOLD_PX: f64 = 100.0;
/// Sections become active this far before their top edge.
pub const SECTION_LEAD_PX: f64 = 100.0;
/// Scroll offset past which the navbar casts a shadow.
pub const SHADOW_THRESHOLD_PX: f64 = 50.0;
/// Height of the fixed navbar; anchor scrolls stop this far above a section.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Measured geometry of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the navbar should highlight.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    if scroll_y < HOME_THRESHOLD_PX {
        return Some("home");
    }
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - SECTION_LEAD_PX;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

#[must_use]
pub fn navbar_shadow(scroll_y: f64) -> bool {
    scroll_y > SHADOW_THRESHOLD_PX
}

/// Window scroll target for an in-page anchor whose section starts at
/// `offset_top`.
#[must_use]
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}
