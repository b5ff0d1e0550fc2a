//! Dropdown selector for choosing a borough.

use crate::state::AppState;
use dioxus::prelude::*;

/// Borough dropdown selector.
/// Reads available municipios from AppState and updates selected_municipio on change.
#[component]
pub fn MunicipioSelector() -> Element {
    let mut state = use_context::<AppState>();
    let municipios = state.municipios.read().clone();
    let selected = (state.selected_municipio)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_municipio.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "municipio-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Municipality: "
            }
            select {
                id: "municipio-select",
                onchange: on_change,
                for municipio in municipios.iter() {
                    option {
                        value: "{municipio}",
                        selected: *municipio == selected,
                        "{municipio}"
                    }
                }
            }
        }
    }
}
