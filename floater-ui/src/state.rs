//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::frame;
use dioxus::prelude::*;
use floater_core::ProfileDate;
use floater_view::pipeline::ProfilePipeline;
use floater_view::renderer::WindowRenderer;
use floater_view::viewport::ViewportState;

/// Shared application state for floater profile apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Floater whose profiles are shown
    pub floater_id: Signal<String>,
    /// Available profile dates, oldest first
    pub dates: Signal<Vec<ProfileDate>>,
    /// Key of the selected profile date (empty until dates are known)
    pub selected_date: Signal<String>,
    /// Error loading the date list, shown instead of the profile
    pub catalog_error: Signal<Option<String>>,
    /// Generation-tagged profile state
    pub pipeline: Signal<ProfilePipeline>,
    /// Viewport, hover and visible window of the depth list
    pub renderer: Signal<WindowRenderer>,
}

impl AppState {
    /// Create a new AppState sized for the current browser viewport.
    pub fn new() -> Self {
        let (width, height) = frame::viewport_size().unwrap_or(frame::DEFAULT_VIEWPORT);
        Self {
            floater_id: Signal::new(String::new()),
            dates: Signal::new(Vec::new()),
            selected_date: Signal::new(String::new()),
            catalog_error: Signal::new(None),
            pipeline: Signal::new(ProfilePipeline::new()),
            renderer: Signal::new(WindowRenderer::new(ViewportState::for_viewport(
                width, height,
            ))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
