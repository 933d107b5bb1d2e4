//! In-page anchor scrolling math.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id named by a same-document `href`, e.g. `"#retailers"`.
///
/// Returns `None` for the bare `"#"` and for anything that is not a fragment,
/// which leaves the browser's default navigation in place.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Scroll position that puts the target just under the fixed header.
///
/// Negative results are passed through; the browser clamps them to the top.
#[must_use]
pub fn scroll_top_for(element_offset_top: f64, header_offset: f64) -> f64 {
    element_offset_top - header_offset
}
