use super::constants::{
    FILTER_ALL, FILTER_DIMMED_OPACITY, MOBILE_BREAKPOINT_PX, NAVBAR_HEIGHT_PX,
    NAVBAR_SHADOW_SCROLLED, NAVBAR_SHADOW_THRESHOLD_PX, NAVBAR_SHADOW_TOP,
};

#[inline]
pub fn navbar_shadow(scroll_top: f64) -> &'static str {
    if scroll_top > NAVBAR_SHADOW_THRESHOLD_PX {
        NAVBAR_SHADOW_SCROLLED
    } else {
        NAVBAR_SHADOW_TOP
    }
}

/// Scroll position that puts a section's top just below the fixed navbar.
#[inline]
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAVBAR_HEIGHT_PX
}

/// Fragment id of an in-page link (`#about` -> `about`); `None` for bare `#`
/// and for anything that is not a fragment link.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[inline]
pub fn filter_matches(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

/// Target style of a portfolio tile under the current filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterLook {
    pub opacity: f64,
    pub pointer_events: &'static str,
}

pub fn filter_look(matches: bool) -> FilterLook {
    if matches {
        FilterLook {
            opacity: 1.0,
            pointer_events: "auto",
        }
    } else {
        FilterLook {
            opacity: FILTER_DIMMED_OPACITY,
            pointer_events: "none",
        }
    }
}

#[inline]
pub fn show_floating_cards(viewport_width: f64) -> bool {
    viewport_width >= MOBILE_BREAKPOINT_PX
}

/// Words to wrap for the text reveal; runs of whitespace collapse.
pub fn reveal_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
