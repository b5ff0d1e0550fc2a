//! Reusable Dioxus RSX components for the CheckoutNet dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod footer;
mod loading_spinner;
mod metric_selector;
mod municipio_selector;
mod operator_selector;
mod page_header;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use footer::Footer;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use municipio_selector::MunicipioSelector;
pub use operator_selector::OperatorSelector;
pub use page_header::PageHeader;
