//! Dropdown selector for choosing a profile date.

use crate::state::AppState;
use dioxus::prelude::*;

/// Profile date dropdown.
/// Reads available dates from AppState and updates selected_date on change.
#[component]
pub fn DateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let dates = state.dates.read().clone();
    let selected = (state.selected_date)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("date selected: {}", value);
        state.selected_date.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "date-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Profile date: "
            }
            select {
                id: "date-select",
                disabled: dates.is_empty(),
                onchange: on_change,
                // Newest first in the menu
                for date in dates.iter().rev() {
                    option {
                        value: "{date.key}",
                        selected: date.key == selected,
                        "{date.display_date()}"
                    }
                }
            }
        }
    }
}
