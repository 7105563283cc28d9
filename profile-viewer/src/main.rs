//! Floater Depth Profile Viewer
//!
//! Shows one floater's depth profile as a virtualized list with a summary
//! panel, and lets the user switch between the floater's profile dates.
//!
//! Data flow:
//! 1. `build.rs` copies `profiles.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the catalog into the WASM binary.
//! 3. On mount, the catalog's dates populate the selector and the latest
//!    date is selected.
//! 4. Each date change takes a request ticket from the pipeline; a response
//!    is applied only if no newer date was selected in the meantime.

mod catalog;

use catalog::ProfileCatalog;
use dioxus::prelude::*;
use floater_core::{FetchError, ProfileDate};
use floater_ui::components::{
    DateSelector, DepthProfileList, EmptyProfile, ErrorDisplay, LoadingSpinner, ProfileHeader,
    SummaryPanel, LIST_ID,
};
use floater_ui::frame::{self, FrameScheduler};
use floater_ui::state::AppState;
use floater_view::pipeline::{Completion, ProfileState};
use std::rc::Rc;

/// Profile catalog for the demo floater.
const PROFILES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/profiles.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("profile-viewer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let catalog: Result<Rc<ProfileCatalog>, FetchError> =
        use_hook(|| ProfileCatalog::parse(PROFILES_JSON).map(Rc::new));

    // Populate the date list once and select the latest profile
    let mounted_catalog = catalog.clone();
    use_effect(move || match &mounted_catalog {
        Ok(catalog) => {
            state.floater_id.set(catalog.floater_id.clone());
            let latest = ProfileDate::latest(&catalog.dates).map(|d| d.key.clone());
            state.dates.set(catalog.dates.clone());
            match latest {
                Some(key) => state.selected_date.set(key),
                None => state
                    .catalog_error
                    .set(Some(format!("No profiles available for floater {}", catalog.floater_id))),
            }
        }
        Err(e) => {
            log::error!("Failed to load profile catalog: {}", e);
            state
                .catalog_error
                .set(Some(format!("Failed to load profile catalog: {}", e)));
        }
    });

    // Request the selected profile whenever the date changes
    let request_catalog = catalog.clone();
    use_effect(move || {
        let key = (state.selected_date)();
        if key.is_empty() {
            return;
        }
        let Ok(catalog) = request_catalog.clone() else {
            return;
        };
        let ticket = state.pipeline.write().begin_request();
        log::info!("requesting profile {} (generation {})", key, ticket.0);
        spawn(async move {
            let result = catalog.get_by_date(&key);
            let completion = state.pipeline.write().complete(ticket, result);
            if completion == Completion::Applied {
                let len = state
                    .pipeline
                    .peek()
                    .profile()
                    .map(|p| p.levels.len())
                    .unwrap_or(0);
                let mut renderer = state.renderer.write();
                renderer.on_data(len);
                renderer.on_scroll(0.0);
                frame::reset_scroll(LIST_ID);
            }
        });
    });

    // Re-layout on window resize, at most once per frame
    use_hook(move || {
        let resize_frames = FrameScheduler::<(f64, f64)>::new();
        frame::on_resize(move |width, height| {
            resize_frames.schedule((width, height), move |(width, height)| {
                state.renderer.write().on_resize(width, height);
            });
        });
    });

    let floater_id = (state.floater_id)();
    let catalog_error = (state.catalog_error)();
    let selected = (state.selected_date)();
    let selected_date = state
        .dates
        .read()
        .iter()
        .find(|d| d.key == selected)
        .map(|d| d.display_date())
        .unwrap_or_default();
    let profile_state = state.pipeline.read().state().clone();
    let cycle = match &profile_state {
        ProfileState::Ready(profile) => profile
            .upstream
            .as_ref()
            .and_then(|s| s.cycle_number)
            .map(|c| c.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    let body = match (catalog_error, profile_state) {
        (Some(message), _) => rsx! { ErrorDisplay { message: message } },
        (None, ProfileState::Idle | ProfileState::Loading) => rsx! { LoadingSpinner {} },
        (None, ProfileState::Failed(e)) => rsx! { ErrorDisplay { message: e.to_string() } },
        (None, ProfileState::Empty) => rsx! { EmptyProfile {} },
        (None, ProfileState::Ready(profile)) => {
            let stats = profile.summary.clone();
            rsx! {
                if let Some(stats) = stats {
                    SummaryPanel { stats: stats }
                }
                DepthProfileList { profile: profile }
            }
        }
    };

    rsx! {
        div {
            style: "font-family: Arial, sans-serif; max-width: 960px; margin: 0 auto; padding: 16px;",
            ProfileHeader {
                floater_id: floater_id,
                date: selected_date,
                cycle: cycle,
            }
            DateSelector {}
            {body}
        }
    }
}
