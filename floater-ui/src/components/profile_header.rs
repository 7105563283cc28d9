//! Profile header with floater id, cycle and date.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileHeaderProps {
    pub floater_id: String,
    /// Profile date for display, e.g. "2024-03-05"
    #[props(default = String::new())]
    pub date: String,
    /// Cycle number of the displayed profile, empty when unknown
    #[props(default = String::new())]
    pub cycle: String,
}

#[component]
pub fn ProfileHeader(props: ProfileHeaderProps) -> Element {
    let mut subtitle = Vec::new();
    if !props.date.is_empty() {
        subtitle.push(props.date.clone());
    }
    if !props.cycle.is_empty() {
        subtitle.push(format!("cycle {}", props.cycle));
    }
    let subtitle = subtitle.join(" · ");

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Floater {props.floater_id} depth profile"
            }
            if !subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{subtitle}"
                }
            }
        }
    }
}
