//! Navigation Helpers
//!
//! Scroll-driven header styling and active-link selection.

/// Scroll offset from which the header gets its solid background
pub const HEADER_SCROLL_THRESHOLD: f64 = 200.0;
/// A section counts as current slightly before its top reaches the viewport
pub const SECTION_LEAD: f64 = 50.0;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SCROLL_THRESHOLD
}

/// Position of a `section[id]` on the page
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y`, if any
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .find(|s| {
            let top = s.top - SECTION_LEAD;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.as_str())
}
