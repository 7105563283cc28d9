use crate::layout::{layout_for, Layout};
use crate::window::{compute_window, VisibleWindow, OVERSCAN};
use serde::Serialize;

/// Scroll and size state of the depth-list viewport.
///
/// Only [`scroll_to`](Self::scroll_to) and [`resize`](Self::resize) change
/// it. The window it yields depends only on the current field values, so
/// scroll and resize notifications may arrive in either order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub container_height: f64,
    pub row_height: f64,
}

impl ViewportState {
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            scroll_offset: 0.0,
            container_height: layout.container_height,
            row_height: layout.row_height,
        }
    }

    /// Initial state for a browser viewport of the given size.
    pub fn for_viewport(viewport_width: f64, viewport_height: f64) -> Self {
        Self::from_layout(layout_for(viewport_width, viewport_height))
    }

    /// Record a new scroll position. Negative or non-finite offsets clamp to 0.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = if offset.is_finite() && offset > 0.0 {
            offset
        } else {
            0.0
        };
    }

    /// Re-apply the layout policy for a new viewport size. The scroll offset
    /// is kept.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        let layout = layout_for(viewport_width, viewport_height);
        self.row_height = layout.row_height;
        self.container_height = layout.container_height;
    }

    /// Rows to materialize for a sequence of `len` rows.
    pub fn window(&self, len: usize) -> VisibleWindow {
        compute_window(
            self.scroll_offset,
            self.container_height,
            self.row_height,
            len,
            OVERSCAN,
        )
    }

    /// Full scrollable height of a sequence, independent of the window.
    pub fn total_height(&self, len: usize) -> f64 {
        len as f64 * self.row_height
    }
}
