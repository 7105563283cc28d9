//! Virtualized depth list.
//!
//! Only the rows of the visible window are in the DOM. They are absolutely
//! positioned inside a spacer as tall as the whole profile, so the native
//! scrollbar reflects every level. Scroll notifications are coalesced to one
//! window recompute per animation frame.

use super::ErrorDisplay;
use crate::frame::{self, FrameScheduler};
use crate::state::AppState;
use dioxus::prelude::*;
use floater_data::format::LevelCells;
use floater_view::pipeline::Profile;
use std::rc::Rc;

/// DOM id of the scroll container.
pub const LIST_ID: &str = "depth-profile-list";

const COLUMNS: [&str; 4] = ["Depth (m)", "Temp (°C)", "Pressure (dbar)", "Salinity (PSU)"];

const GRID: &str = "display: grid; grid-template-columns: repeat(4, 1fr); align-items: center;";

#[component]
pub fn DepthProfileList(profile: Rc<Profile>) -> Element {
    let mut state = use_context::<AppState>();
    let scroll_frames = use_hook(FrameScheduler::<()>::new);

    let mut renderer = state.renderer.read().clone();
    let rendered = match renderer.render(&profile.levels) {
        Ok(rendered) => rendered,
        Err(e) => {
            log::error!("depth list: {}", e);
            return rsx! {
                ErrorDisplay { message: e.to_string() }
            };
        }
    };
    let viewport = *renderer.viewport();
    let total_height = rendered.total_height;
    let container_height = viewport.container_height;
    let row_height = viewport.row_height;

    let on_scroll = move |_: Event<ScrollData>| {
        scroll_frames.schedule((), move |_| {
            if let Some(top) = frame::scroll_top(LIST_ID) {
                state.renderer.write().on_scroll(top);
            }
        });
    };

    rsx! {
        div {
            style: "border: 1px solid #DDD; border-radius: 4px; font-size: 13px;",
            div {
                style: "{GRID} font-weight: bold; background: #FAFAFA; border-bottom: 1px solid #DDD; height: {row_height}px; padding: 0 8px;",
                for column in COLUMNS {
                    span { "{column}" }
                }
            }
            div {
                id: LIST_ID,
                role: "list",
                style: "height: {container_height}px; overflow-y: auto; position: relative;",
                onscroll: on_scroll,
                onmouseleave: move |_| state.renderer.write().set_hover(None),
                div {
                    style: "height: {total_height}px; position: relative;",
                    for row in rendered.rows {
                        DepthRow {
                            key: "{row.key}",
                            index: row.key,
                            offset: row.offset,
                            height: row_height,
                            odd: row.odd,
                            hovered: row.hovered,
                            cells: row.cells,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DepthRow(
    index: usize,
    offset: f64,
    height: f64,
    odd: bool,
    hovered: bool,
    cells: LevelCells,
) -> Element {
    let mut state = use_context::<AppState>();
    let background = if hovered {
        "#E3F2FD"
    } else if odd {
        "#F7F9FB"
    } else {
        "#FFFFFF"
    };

    rsx! {
        div {
            role: "listitem",
            style: "{GRID} position: absolute; top: {offset}px; left: 0; right: 0; height: {height}px; padding: 0 8px; background: {background};",
            onmouseenter: move |_| state.renderer.write().set_hover(Some(index)),
            span { "{cells.depth}" }
            span { "{cells.temp}" }
            span { "{cells.pres}" }
            span { "{cells.psal}" }
        }
    }
}
