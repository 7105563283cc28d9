use dioxus::prelude::*;

/// Shown when a profile loaded fine but has no displayable levels.
#[component]
pub fn EmptyProfile() -> Element {
    rsx! {
        div {
            style: "padding: 24px 16px; margin: 8px 0; color: #555; background: #F5F5F5; border-radius: 4px; text-align: center;",
            "No measurements in this profile."
        }
    }
}
