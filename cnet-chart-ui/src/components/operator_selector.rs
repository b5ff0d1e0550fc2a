//! Dropdown selector for choosing a network operator.

use crate::state::AppState;
use dioxus::prelude::*;

/// Network operator dropdown selector.
/// Reads available operators from AppState and updates selected_operator on change.
#[component]
pub fn OperatorSelector() -> Element {
    let mut state = use_context::<AppState>();
    let operators = state.operators.read().clone();
    let selected = (state.selected_operator)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_operator.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "operator-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Network Operator: "
            }
            select {
                id: "operator-select",
                onchange: on_change,
                for operator in operators.iter() {
                    option {
                        value: "{operator}",
                        selected: *operator == selected,
                        "{operator}"
                    }
                }
            }
        }
    }
}
