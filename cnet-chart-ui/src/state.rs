//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The three selection signals are the whole interaction surface of the
//! dashboard; changing any of them re-runs the chart effect in the app.

use cnet_db::Database;
use cnet_geo::CellAtlas;
use dioxus::prelude::*;

/// Shared application state for the CheckoutNet dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Parsed H3 cell geometry (None until loaded)
    pub atlas: Signal<Option<CellAtlas>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected borough
    pub selected_municipio: Signal<String>,
    /// Currently selected network operator
    pub selected_operator: Signal<String>,
    /// Currently selected metric code
    pub selected_variable: Signal<String>,
    /// Available boroughs, in first-appearance order
    pub municipios: Signal<Vec<String>>,
    /// Available operators, in first-appearance order
    pub operators: Signal<Vec<String>>,
    /// Available metric codes, in first-appearance order
    pub variables: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            atlas: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_municipio: Signal::new(String::new()),
            selected_operator: Signal::new(String::new()),
            selected_variable: Signal::new(String::new()),
            municipios: Signal::new(Vec::new()),
            operators: Signal::new(Vec::new()),
            variables: Signal::new(Vec::new()),
        }
    }
}
