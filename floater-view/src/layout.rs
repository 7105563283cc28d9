//! Responsive layout policy.
//!
//! Maps the browser viewport size to the list's row height and the height of
//! its scrollable container. The table is evaluated top to bottom on viewport
//! width and the first matching row wins.

use serde::Serialize;

/// Vertical space reserved above the scrollable region (header and summary chrome).
pub const HEADER_OFFSET: f64 = 90.0;

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Exclusive upper bound on viewport width; `None` matches everything.
    pub below_width: Option<f64>,
    pub row_height: f64,
    /// Share of the viewport height given to the list.
    pub height_fraction: f64,
    /// Upper bound on the list height before the header offset is removed.
    pub height_cap: f64,
}

pub const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint {
        below_width: Some(480.0),
        row_height: 36.0,
        height_fraction: 0.30,
        height_cap: 240.0,
    },
    Breakpoint {
        below_width: Some(768.0),
        row_height: 36.0,
        height_fraction: 0.35,
        height_cap: 320.0,
    },
    Breakpoint {
        below_width: Some(1024.0),
        row_height: 40.0,
        height_fraction: 0.40,
        height_cap: 400.0,
    },
    Breakpoint {
        below_width: None,
        row_height: 40.0,
        height_fraction: 0.45,
        height_cap: 480.0,
    },
];

/// Row and container heights for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub row_height: f64,
    pub container_height: f64,
}

/// Select the breakpoint for a viewport width.
pub fn breakpoint_for(viewport_width: f64) -> &'static Breakpoint {
    BREAKPOINTS
        .iter()
        .find(|bp| match bp.below_width {
            Some(limit) => viewport_width < limit,
            None => true,
        })
        .unwrap_or(&BREAKPOINTS[BREAKPOINTS.len() - 1])
}

/// Compute the layout for a viewport.
///
/// The container is never shorter than one row, so very short viewports still
/// show a scrollable list instead of a zero or negative height.
pub fn layout_for(viewport_width: f64, viewport_height: f64) -> Layout {
    let bp = breakpoint_for(viewport_width);
    let vh = if viewport_height.is_finite() {
        viewport_height.max(0.0)
    } else {
        0.0
    };
    let container_height = (vh * bp.height_fraction).min(bp.height_cap) - HEADER_OFFSET;
    Layout {
        row_height: bp.row_height,
        container_height: container_height.max(bp.row_height),
    }
}
