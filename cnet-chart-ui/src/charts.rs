//! Pure JSON payload builders for the choropleth map and forecast chart.
//!
//! These functions turn query results into the trace/config objects the D3
//! renderers in `assets/js/` consume. Keeping them free of DOM concerns makes
//! the trace layout testable natively.

use cnet_db::models::{CellMedian, SeriesRecord};
use cnet_utils::labels;
use serde_json::{json, Value};

/// Fixed map view over Mexico City.
pub const MAP_CENTER_LAT: f64 = 19.4326;
pub const MAP_CENTER_LON: f64 = -99.1332;
pub const MAP_ZOOM: u32 = 9;
pub const MAP_OPACITY: f64 = 0.5;
pub const MAP_HEIGHT: u32 = 600;

/// Build the four forecast-chart traces in their fixed paint order:
///
/// 1. `Historic` line over the historical partition,
/// 2. `Forecast` center line over the forecast partition,
/// 3. `y_hat upper` line filling down to the trace before it (the center),
/// 4. `y_hat lower` line filling up to the trace before it (the upper).
///
/// The `tonexty` fill on traces 3 and 4 shades against the immediately
/// preceding trace, so the visible band is upper-to-center plus lower-to-upper.
/// Reordering the traces breaks the shading; the renderer paints them as given.
///
/// Both partitions are emitted in input order; callers pass date-sorted data.
/// Empty partitions still produce all four traces (with empty coordinate
/// arrays), which renders as an empty chart rather than failing.
pub fn forecast_traces(historical: &[SeriesRecord], forecast: &[SeriesRecord]) -> Value {
    let historical_x: Vec<&str> = historical.iter().map(|r| r.ds.as_str()).collect();
    let historical_y: Vec<f64> = historical.iter().map(|r| r.y).collect();

    let forecast_x: Vec<&str> = forecast.iter().map(|r| r.ds.as_str()).collect();
    let forecast_y: Vec<f64> = forecast.iter().map(|r| r.y).collect();
    // Bounds should always be present on forecast rows; a missing one becomes
    // a null the renderer skips.
    let upper_y: Vec<Value> = forecast.iter().map(|r| json!(r.yhat_upper)).collect();
    let lower_y: Vec<Value> = forecast.iter().map(|r| json!(r.yhat_lower)).collect();

    json!([
        {
            "name": "Historic",
            "x": historical_x,
            "y": historical_y,
            "mode": "lines",
            "line": {"color": "lightblue"},
        },
        {
            "name": "Forecast",
            "x": forecast_x,
            "y": forecast_y,
            "mode": "lines",
            "line": {"color": "orange"},
        },
        {
            "name": "y_hat upper",
            "x": forecast_x,
            "y": upper_y,
            "mode": "lines",
            "line": {"color": "lightgreen"},
            "fill": "tonexty",
            "fillcolor": "rgba(144, 238, 144, 0.2)",
        },
        {
            "name": "y_hat lower",
            "x": forecast_x,
            "y": lower_y,
            "mode": "lines",
            "line": {"color": "lightcoral"},
            "fill": "tonexty",
            "fillcolor": "rgba(255, 182, 193, 0.2)",
        },
    ])
}

/// Chart-level config for the forecast chart.
pub fn forecast_chart_config(label: &str) -> Value {
    json!({
        "title": format!("{} through time", label),
        "xAxisLabel": "Date",
        "yAxisLabel": labels::capitalized(label),
        "legend": {"x": 0, "y": 1},
    })
}

/// Build the choropleth join data: one `{h3_08, median}` entry per cell in
/// the filtered median subset. Cells present in the geometry but absent here
/// render in the neutral map color.
pub fn choropleth_data(medians: &[CellMedian]) -> Value {
    Value::Array(
        medians
            .iter()
            .map(|m| json!({"h3_08": m.h3_08, "median": m.median}))
            .collect(),
    )
}

/// Map config: fixed CDMX view plus the hover label for the selection.
pub fn choropleth_config(label: &str, operator: &str, municipio: &str) -> Value {
    json!({
        "featureKey": cnet_geo::CELL_ID_PROPERTY,
        "center": {"lat": MAP_CENTER_LAT, "lon": MAP_CENTER_LON},
        "zoom": MAP_ZOOM,
        "opacity": MAP_OPACITY,
        "height": MAP_HEIGHT,
        "valueLabel": format!("median {} for {} in {}", label, operator, municipio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnet_db::models::RecordType;

    fn series(ds: &str, record_type: RecordType, y: f64, bounds: Option<(f64, f64)>) -> SeriesRecord {
        SeriesRecord {
            ds: ds.to_string(),
            municipio: "Cuauhtémoc".to_string(),
            operator: "AT&T".to_string(),
            variable: "m_download_mbps".to_string(),
            record_type,
            y,
            yhat_upper: bounds.map(|(u, _)| u),
            yhat_lower: bounds.map(|(_, l)| l),
        }
    }

    fn median(h3_08: &str, value: f64) -> CellMedian {
        CellMedian {
            h3_08: h3_08.to_string(),
            municipio: "Cuauhtémoc".to_string(),
            operator: "AT&T".to_string(),
            variable: "m_download_mbps".to_string(),
            median: value,
        }
    }

    #[test]
    fn traces_come_in_fixed_order_with_fixed_names() {
        let historical = vec![series("2024-01-01", RecordType::Historical, 12.5, None)];
        let forecast = vec![series(
            "2024-02-01",
            RecordType::Forecast,
            13.0,
            Some((14.0, 12.0)),
        )];
        let traces = forecast_traces(&historical, &forecast);
        let traces = traces.as_array().unwrap();
        assert_eq!(traces.len(), 4);

        let names: Vec<&str> = traces.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Historic", "Forecast", "y_hat upper", "y_hat lower"]);
    }

    #[test]
    fn only_bound_traces_fill_to_the_previous_trace() {
        let forecast = vec![series(
            "2024-02-01",
            RecordType::Forecast,
            13.0,
            Some((14.0, 12.0)),
        )];
        let traces = forecast_traces(&[], &forecast);
        let traces = traces.as_array().unwrap();

        assert!(traces[0].get("fill").is_none(), "Historic trace has no fill");
        assert!(traces[1].get("fill").is_none(), "Forecast trace has no fill");
        assert_eq!(traces[2]["fill"], "tonexty");
        assert_eq!(traces[2]["fillcolor"], "rgba(144, 238, 144, 0.2)");
        assert_eq!(traces[3]["fill"], "tonexty");
        assert_eq!(traces[3]["fillcolor"], "rgba(255, 182, 193, 0.2)");
    }

    #[test]
    fn trace_colors_match_the_legend() {
        let traces = forecast_traces(&[], &[]);
        let traces = traces.as_array().unwrap();
        assert_eq!(traces[0]["line"]["color"], "lightblue");
        assert_eq!(traces[1]["line"]["color"], "orange");
        assert_eq!(traces[2]["line"]["color"], "lightgreen");
        assert_eq!(traces[3]["line"]["color"], "lightcoral");
    }

    #[test]
    fn empty_partitions_still_produce_four_traces() {
        let traces = forecast_traces(&[], &[]);
        let traces = traces.as_array().unwrap();
        assert_eq!(traces.len(), 4);
        for trace in traces {
            assert_eq!(trace["x"].as_array().unwrap().len(), 0);
            assert_eq!(trace["y"].as_array().unwrap().len(), 0);
        }
    }

    #[test]
    fn bound_traces_share_the_forecast_dates() {
        let forecast = vec![
            series("2024-02-01", RecordType::Forecast, 13.0, Some((14.0, 12.0))),
            series("2024-02-02", RecordType::Forecast, 13.2, Some((14.1, 12.2))),
        ];
        let traces = forecast_traces(&[], &forecast);
        let traces = traces.as_array().unwrap();
        assert_eq!(traces[1]["x"], traces[2]["x"]);
        assert_eq!(traces[1]["x"], traces[3]["x"]);
        assert_eq!(traces[2]["y"][0], 14.0);
        assert_eq!(traces[3]["y"][1], 12.2);
    }

    #[test]
    fn missing_bounds_become_nulls() {
        let forecast = vec![series("2024-02-01", RecordType::Forecast, 13.0, None)];
        let traces = forecast_traces(&[], &forecast);
        assert!(traces[2]["y"][0].is_null());
        assert!(traces[3]["y"][0].is_null());
    }

    #[test]
    fn chart_config_derives_titles_from_label() {
        let config = forecast_chart_config("download mbps");
        assert_eq!(config["title"], "download mbps through time");
        assert_eq!(config["xAxisLabel"], "Date");
        assert_eq!(config["yAxisLabel"], "Download mbps");
        assert_eq!(config["legend"]["x"], 0);
        assert_eq!(config["legend"]["y"], 1);
    }

    #[test]
    fn choropleth_data_carries_one_entry_per_cell() {
        let data = choropleth_data(&[median("a", 1.5), median("b", 2.5)]);
        let entries = data.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["h3_08"], "a");
        assert_eq!(entries[1]["median"], 2.5);
    }

    #[test]
    fn choropleth_data_for_empty_subset_is_an_empty_array() {
        // Renders as an all-neutral map; geometry cells with no entry are fine.
        let data = choropleth_data(&[]);
        assert_eq!(data.as_array().unwrap().len(), 0);
    }

    #[test]
    fn choropleth_config_pins_the_cdmx_view() {
        let config = choropleth_config("latency", "AT&T", "Coyoacán");
        assert_eq!(config["featureKey"], "h3_08");
        assert_eq!(config["center"]["lat"], 19.4326);
        assert_eq!(config["center"]["lon"], -99.1332);
        assert_eq!(config["zoom"], 9);
        assert_eq!(config["opacity"], 0.5);
        assert_eq!(config["height"], 600);
        assert_eq!(config["valueLabel"], "median latency for AT&T in Coyoacán");
    }
}
