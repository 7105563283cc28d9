//! View-side logic for the depth-profile list.
//!
//! This crate provides:
//! - `layout`: breakpoint policy mapping viewport size to row and container heights
//! - `window`: the windowing calculator (which rows must exist for a scroll position)
//! - `viewport`: `ViewportState`, updated by scroll and resize notifications
//! - `renderer`: row descriptors for the visible window only
//! - `scheduler`: latest-wins coalescing of high-frequency notifications
//! - `pipeline`: generation-tagged replacement of the displayed profile
//!
//! Nothing in here touches the DOM; `floater-ui` wires these into Dioxus.

pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod scheduler;
pub mod viewport;
pub mod window;
