use dioxus::prelude::*;

/// Loading indicator shown while a profile request is in flight.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading profile...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{message}"
        }
    }
}
