//! CheckoutNet - LTE data utilization dashboard for Mexico City.
//!
//! Single-page dashboard over pre-computed telemetry: historical daily metric
//! values plus a 3-month forecast per (borough, operator, metric), and median
//! values aggregated over H3 resolution-8 cells. The user picks a borough,
//! a network operator, and a metric; the page shows a choropleth map of the
//! cell medians and a time-series chart with the forecast band.
//!
//! Data flow:
//! 1. `build.rs` copies the forecast CSV, the median CSV, and the H3 cell
//!    GeoJSON into `OUT_DIR`.
//! 2. `include_str!` embeds all three files into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database and
//!    the GeoJSON is validated; the selector lists are derived from the
//!    distinct time-series dimensions. This happens once per session.
//! 4. Whenever a selection changes, the app queries the filtered subsets and
//!    re-renders both panels through the D3.js bridge.

use cnet_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, Footer, LoadingSpinner, MetricSelector,
    MunicipioSelector, OperatorSelector, PageHeader,
};
use cnet_chart_ui::{charts, js_bridge};
use cnet_chart_ui::state::AppState;
use cnet_db::models::partition_series;
use cnet_db::Database;
use cnet_geo::CellAtlas;
use cnet_utils::labels;
use dioxus::prelude::*;

/// Long-format time series: historical + forecast rows per dimension triple.
const TIMESERIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/data_forecast_mvp.csv"));
/// Median metric value per H3 resolution-8 cell.
const MEDIANS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/h3_median_data_cdmx.csv"));
/// Hexagonal cell polygons keyed by `properties.h3_08`.
const CELLS_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/h3_cdmx.geojson"));

/// Chart container DOM element IDs used by D3.js to render into.
const MAP_CONTAINER_ID: &str = "h3-median-map";
const SERIES_CONTAINER_ID: &str = "forecast-series-chart";

static LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("cdmx-lte-root"))
        .launch(App);
}

/// Load everything the dashboard needs, or fail as a whole.
///
/// There is no partial mode: a malformed date, value, or geometry makes the
/// entire view unusable and the error is shown full-page.
fn load_datasets() -> anyhow::Result<(Database, CellAtlas, Vec<String>, Vec<String>, Vec<String>)> {
    let db = Database::new()?;
    db.load_timeseries(TIMESERIES_CSV)?;
    db.load_medians(MEDIANS_CSV)?;
    let atlas = CellAtlas::from_geojson_str(CELLS_GEOJSON)?;

    let municipios = db.query_municipios()?;
    let operators = db.query_operators()?;
    let variables = db.query_variables()?;
    Ok((db, atlas, municipios, operators, variables))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load data once on mount; selectors default to the first value of each list.
    use_effect(move || {
        match load_datasets() {
            Ok((db, atlas, municipios, operators, variables)) => {
                state
                    .selected_municipio
                    .set(municipios.first().cloned().unwrap_or_default());
                state
                    .selected_operator
                    .set(operators.first().cloned().unwrap_or_default());
                state
                    .selected_variable
                    .set(variables.first().cloned().unwrap_or_default());
                state.municipios.set(municipios);
                state.operators.set(operators);
                state.variables.set(variables);
                state.db.set(Some(db));
                state.atlas.set(Some(atlas));
                state.loading.set(false);

                // Initialize D3 chart scripts (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load datasets: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load dashboard data: {:#}", e)));
                state.loading.set(false);
            }
        }
    });

    // Re-render both panels whenever a selection changes.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let atlas = match &*state.atlas.read() {
            Some(atlas) => atlas.clone(),
            None => return,
        };

        let municipio = (state.selected_municipio)();
        let operator = (state.selected_operator)();
        let variable = (state.selected_variable)();
        if municipio.is_empty() || operator.is_empty() || variable.is_empty() {
            return;
        }
        let label = labels::metric_display_label(&variable);
        log::info!("render: ({}, {}, {}) -> {}", municipio, operator, variable, label);

        // Choropleth map. An empty subset paints every cell in the neutral
        // color; only a query failure clears the panel.
        match db.query_medians(&municipio, &operator, &variable) {
            Ok(medians) => {
                let data_json = charts::choropleth_data(&medians).to_string();
                let config_json =
                    charts::choropleth_config(label, &operator, &municipio).to_string();
                js_bridge::render_choropleth_map(
                    MAP_CONTAINER_ID,
                    atlas.raw_json(),
                    &data_json,
                    &config_json,
                );
            }
            Err(e) => {
                log::error!("query_medians failed: {:#}", e);
                js_bridge::destroy_chart(MAP_CONTAINER_ID);
            }
        }

        // Forecast chart. Empty partitions still render (as an empty chart).
        match db.query_series(&municipio, &operator, &variable) {
            Ok(series) => {
                let (historical, forecast) = partition_series(&series);
                let data_json = charts::forecast_traces(&historical, &forecast).to_string();
                let config_json = charts::forecast_chart_config(label).to_string();
                js_bridge::render_forecast_chart(SERIES_CONTAINER_ID, &data_json, &config_json);
            }
            Err(e) => {
                log::error!("query_series failed: {:#}", e);
                js_bridge::destroy_chart(SERIES_CONTAINER_ID);
            }
        }
    });

    let municipio = (state.selected_municipio)();
    let operator = (state.selected_operator)();
    let variable = (state.selected_variable)();
    let label = labels::metric_display_label(&variable);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Welcome to CheckoutNet!".to_string(),
                logo_src: LOGO.to_string(),
            }

            div {
                style: "text-align: center; max-width: 840px; margin: 0 auto 16px auto;",
                h2 { "Understanding LTE Data Utilization in Mexico City 🚀" }
                p {
                    "This application, developed by EFTS Group, provides insights into LTE data "
                    "usage patterns in Mexico City (CDMX) 📊. Explore average download speeds, "
                    "upload speeds, and latency across various boroughs, and gain valuable "
                    "insights into how data is being utilized in this vibrant urban area. "
                    "Our app contains a 3-month forecast for each metric, allowing you to "
                    "understand future trends in data usage 📶."
                }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                h2 {
                    style: "text-align: center;",
                    "Viz Options"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; justify-content: center; align-items: flex-end; margin-bottom: 8px;",
                    MunicipioSelector {}
                    OperatorSelector {}
                    MetricSelector {}
                }

                ChartHeader {
                    title: format!("🛑 H3 Map average {} for {} in {}", label, operator, municipio),
                }
                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    loading: false,
                    min_height: 600,
                }

                ChartHeader {
                    title: format!("📈 Time Series - {} Daily average for {} in {}", label, operator, municipio),
                }
                ChartContainer {
                    id: SERIES_CONTAINER_ID.to_string(),
                    loading: false,
                    min_height: 450,
                }
            }

            Footer {}
        }
    }
}
