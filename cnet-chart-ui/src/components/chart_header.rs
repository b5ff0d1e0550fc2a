//! Centered section heading above each chart panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Panel title, already including the resolved metric label and selection.
    pub title: String,
}

/// Centered heading for the map and time-series panels.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "text-align: center; margin: 24px 0 8px 0;",
            "{props.title}"
        }
    }
}
