//! Reusable Dioxus RSX components for floater profile apps.

mod date_selector;
mod depth_profile_list;
mod empty_profile;
mod error_display;
mod loading_spinner;
mod profile_header;
mod summary_panel;

pub use date_selector::DateSelector;
pub use depth_profile_list::{DepthProfileList, LIST_ID};
pub use empty_profile::EmptyProfile;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use profile_header::ProfileHeader;
pub use summary_panel::SummaryPanel;
