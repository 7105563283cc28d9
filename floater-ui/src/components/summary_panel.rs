//! Summary panel for the displayed profile.

use dioxus::prelude::*;
use floater_data::format::summary_lines;
use floater_data::summary::SummaryStats;

#[component]
pub fn SummaryPanel(stats: SummaryStats) -> Element {
    let lines = summary_lines(&stats);

    rsx! {
        dl {
            style: "display: grid; grid-template-columns: max-content 1fr; gap: 4px 12px; margin: 8px 0; font-size: 13px;",
            for (label, value) in lines {
                dt { style: "font-weight: bold; color: #444;", "{label}" }
                dd { style: "margin: 0;", "{value}" }
            }
        }
    }
}
