//! Window renderer.
//!
//! Produces one row descriptor per index of the visible window. Rows are
//! absolutely positioned at `index * row_height` inside a container whose
//! height is always `len * row_height`, so the scrollbar behaves as if every
//! row existed while only the window is materialized.

use crate::viewport::ViewportState;
use crate::window::VisibleWindow;
use floater_data::format::LevelCells;
use floater_data::normalize::DisplayLevel;
use log::debug;
use std::fmt;

/// One materialized row of the depth list.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor<'a> {
    /// Stable identity: the row index, not the data value.
    pub key: usize,
    /// Absolute vertical offset inside the scroll container.
    pub offset: f64,
    /// Zebra striping flag.
    pub odd: bool,
    pub hovered: bool,
    pub level: &'a DisplayLevel,
    pub cells: LevelCells,
}

/// Rows of the current window plus the container's full height.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWindow<'a> {
    pub window: VisibleWindow,
    pub rows: Vec<RowDescriptor<'a>>,
    pub total_height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The window refers to rows that no longer exist, i.e. it was computed
    /// for a different sequence length.
    StaleWindow { end: usize, len: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::StaleWindow { end, len } => write!(
                f,
                "window ends at row {} but the profile only has {} rows",
                end, len
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Build row descriptors for `window` over `levels`.
///
/// Fails instead of clamping when the window reaches past the sequence:
/// a stale window must be recomputed, not patched up.
pub fn rows_for<'a>(
    window: &VisibleWindow,
    levels: &'a [DisplayLevel],
    row_height: f64,
    hovered: Option<usize>,
) -> Result<Vec<RowDescriptor<'a>>, RenderError> {
    if let Some(end) = window.end() {
        if end >= levels.len() {
            return Err(RenderError::StaleWindow {
                end,
                len: levels.len(),
            });
        }
    }
    Ok(window
        .indices()
        .map(|index| {
            let level = &levels[index];
            RowDescriptor {
                key: index,
                offset: index as f64 * row_height,
                odd: index % 2 == 1,
                hovered: hovered == Some(index),
                level,
                cells: LevelCells::from(level),
            }
        })
        .collect())
}

/// Interaction state of the depth list: viewport, hover and the window last
/// computed together with the sequence length it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRenderer {
    viewport: ViewportState,
    hovered: Option<usize>,
    window: VisibleWindow,
    len: usize,
}

impl WindowRenderer {
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            viewport,
            hovered: None,
            window: VisibleWindow::empty(),
            len: 0,
        }
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn recompute(&mut self) {
        self.window = self.viewport.window(self.len);
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.viewport.scroll_to(offset);
        self.recompute();
    }

    pub fn on_resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.viewport.resize(viewport_width, viewport_height);
        self.recompute();
    }

    /// A new sequence replaced the old one. The hover index is dropped if it
    /// no longer points at a row.
    pub fn on_data(&mut self, len: usize) {
        self.len = len;
        if matches!(self.hovered, Some(i) if i >= len) {
            self.hovered = None;
        }
        self.recompute();
    }

    /// Hover a row; indices outside the sequence are ignored.
    pub fn set_hover(&mut self, index: Option<usize>) {
        match index {
            Some(i) if i >= self.len => {}
            other => self.hovered = other,
        }
    }

    /// Render the current window over `levels`, recomputing first if the
    /// sequence length changed since the last pass.
    pub fn render<'a>(
        &mut self,
        levels: &'a [DisplayLevel],
    ) -> Result<RenderedWindow<'a>, RenderError> {
        if levels.len() != self.len {
            debug!(
                "renderer: sequence length changed {} -> {}, recomputing window",
                self.len,
                levels.len()
            );
            self.on_data(levels.len());
        }
        let rows = rows_for(&self.window, levels, self.viewport.row_height, self.hovered)?;
        Ok(RenderedWindow {
            window: self.window,
            rows,
            total_height: self.viewport.total_height(levels.len()),
        })
    }
}
