//! Dropdown selector for choosing a metric.

use crate::state::AppState;
use dioxus::prelude::*;

/// Metric dropdown selector.
///
/// Options show the raw metric codes from the data (e.g. `m_download_mbps`);
/// the display label only appears in chart titles once resolved.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let variables = state.variables.read().clone();
    let selected = (state.selected_variable)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_variable.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Variable: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for variable in variables.iter() {
                    option {
                        value: "{variable}",
                        selected: *variable == selected,
                        "{variable}"
                    }
                }
            }
        }
    }
}
