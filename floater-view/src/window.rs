//! Windowing calculator.
//!
//! Given a scroll position, a container height, a fixed row height and the
//! number of rows, computes the inclusive range of row indices that must be
//! materialized. The range covers every row intersecting the viewport plus
//! [`OVERSCAN`] rows on each side, and never leaves `0..len`.

use serde::Serialize;
use std::ops::Range;

/// Extra rows materialized above and below the visible region.
pub const OVERSCAN: usize = 5;

/// Inclusive range of row indices to materialize; empty for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisibleWindow {
    bounds: Option<(usize, usize)>,
}

impl VisibleWindow {
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn start(&self) -> Option<usize> {
        self.bounds.map(|(start, _)| start)
    }

    pub fn end(&self) -> Option<usize> {
        self.bounds.map(|(_, end)| end)
    }

    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        match self.bounds {
            Some((start, end)) => end - start + 1,
            None => 0,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self.bounds {
            Some((start, end)) => start <= index && index <= end,
            None => false,
        }
    }

    /// The window as a half-open index range.
    pub fn indices(&self) -> Range<usize> {
        match self.bounds {
            Some((start, end)) => start..end + 1,
            None => 0..0,
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Compute the visible window.
///
/// ```text
/// start = max(0, floor(scroll / row) - overscan)
/// end   = min(len - 1, ceil((scroll + container) / row) + overscan)
/// ```
///
/// When the scroll position is past the end of the content, `start` is pulled
/// back to `end` so the window stays well-formed. A non-positive row height is
/// treated as one unit.
pub fn compute_window(
    scroll_offset: f64,
    container_height: f64,
    row_height: f64,
    len: usize,
    overscan: usize,
) -> VisibleWindow {
    if len == 0 {
        return VisibleWindow::empty();
    }
    let scroll = non_negative(scroll_offset);
    let container = non_negative(container_height);
    let row = if row_height.is_finite() && row_height > 0.0 {
        row_height
    } else {
        1.0
    };

    // `as usize` saturates, so absurd offsets clamp instead of wrapping.
    let first_visible = (scroll / row).floor() as usize;
    let last_edge = ((scroll + container) / row).ceil() as usize;

    let end = last_edge.saturating_add(overscan).min(len - 1);
    let start = first_visible.saturating_sub(overscan).min(end);
    VisibleWindow {
        bounds: Some((start, end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_list_window() {
        // floor(400 / 40) - 5 = 5, ceil(700 / 40) + 5 = 23
        let window = compute_window(400.0, 300.0, 40.0, 100, 5);
        assert_eq!(window.start(), Some(5));
        assert_eq!(window.end(), Some(23));
        assert_eq!(window.len(), 19);
        assert_eq!(window.indices(), 5..24);
    }

    #[test]
    fn test_top_of_list_clamps_start() {
        let window = compute_window(0.0, 300.0, 40.0, 100, 5);
        assert_eq!(window.start(), Some(0));
        assert_eq!(window.end(), Some(13));
    }

    #[test]
    fn test_short_list_clamps_end() {
        let window = compute_window(0.0, 300.0, 40.0, 4, 5);
        assert_eq!(window.start(), Some(0));
        assert_eq!(window.end(), Some(3));
    }

    #[test]
    fn test_empty_sequence_is_empty_window() {
        for scroll in [0.0, 400.0, 1e9] {
            let window = compute_window(scroll, 300.0, 40.0, 0, 5);
            assert!(window.is_empty());
            assert_eq!(window.len(), 0);
            assert_eq!(window.indices(), 0..0);
            assert!(!window.contains(0));
        }
    }

    #[test]
    fn test_scroll_past_content_stays_in_bounds() {
        let window = compute_window(10_000.0, 300.0, 40.0, 10, 5);
        assert_eq!(window.start(), Some(9));
        assert_eq!(window.end(), Some(9));
    }

    #[test]
    fn test_bad_inputs_are_sanitized() {
        let window = compute_window(f64::NAN, -5.0, 0.0, 20, 0);
        assert_eq!(window.start(), Some(0));
        assert_eq!(window.end(), Some(0));
    }

    #[test]
    fn test_zero_overscan_exact_rows() {
        // rows 10..=17 intersect [400, 700); ceil keeps one more below
        let window = compute_window(400.0, 300.0, 40.0, 100, 0);
        assert_eq!(window.start(), Some(10));
        assert_eq!(window.end(), Some(18));
    }
}
