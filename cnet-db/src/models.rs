//! Query result model structs for the telemetry tables.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;

/// Whether a time-series row is an observed value or a model prediction.
///
/// Stored as lowercase text in the `record_type` column; the CSV `type`
/// column uses the same two spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Historical,
    Forecast,
}

impl RecordType {
    /// Parse the CSV/SQL spelling. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "historical" => Some(Self::Historical),
            "forecast" => Some(Self::Forecast),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Forecast => "forecast",
        }
    }
}

impl FromSql for RecordType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Self::parse(s).ok_or_else(|| {
            FromSqlError::Other(format!("unrecognized record type '{}'", s).into())
        })
    }
}

impl ToSql for RecordType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// A single filtered time-series row for the forecast chart.
///
/// `yhat_upper`/`yhat_lower` are the forecast confidence bounds; they are
/// `None` on historical rows (enforced at load time).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesRecord {
    /// Observation date, normalized `YYYY-MM-DD`.
    pub ds: String,
    /// CDMX borough name.
    pub municipio: String,
    /// Mobile network carrier.
    pub operator: String,
    /// Metric code (e.g. `m_download_mbps`).
    pub variable: String,
    pub record_type: RecordType,
    /// Metric value (Mbps or milliseconds depending on `variable`).
    pub y: f64,
    pub yhat_upper: Option<f64>,
    pub yhat_lower: Option<f64>,
}

/// Median metric value for one H3 resolution-8 cell, for the choropleth map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CellMedian {
    /// H3 resolution-8 cell id, matching `properties.h3_08` in the geometry file.
    pub h3_08: String,
    pub municipio: String,
    pub operator: String,
    pub variable: String,
    pub median: f64,
}

/// Split a filtered time-series subset into its historical and forecast
/// partitions, preserving the (date-ascending) input order.
///
/// Every input record lands in exactly one partition since `record_type`
/// is a two-variant enum.
pub fn partition_series(records: &[SeriesRecord]) -> (Vec<SeriesRecord>, Vec<SeriesRecord>) {
    let mut historical = Vec::new();
    let mut forecast = Vec::new();
    for record in records {
        match record.record_type {
            RecordType::Historical => historical.push(record.clone()),
            RecordType::Forecast => forecast.push(record.clone()),
        }
    }
    (historical, forecast)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ds: &str, record_type: RecordType, bounds: Option<(f64, f64)>) -> SeriesRecord {
        SeriesRecord {
            ds: ds.to_string(),
            municipio: "Cuauhtémoc".to_string(),
            operator: "AT&T".to_string(),
            variable: "m_download_mbps".to_string(),
            record_type,
            y: 10.0,
            yhat_upper: bounds.map(|(u, _)| u),
            yhat_lower: bounds.map(|(_, l)| l),
        }
    }

    #[test]
    fn record_type_parses_both_spellings() {
        assert_eq!(RecordType::parse("historical"), Some(RecordType::Historical));
        assert_eq!(RecordType::parse("forecast"), Some(RecordType::Forecast));
        assert_eq!(RecordType::parse("other"), None);
        assert_eq!(RecordType::parse("Historical"), None, "parse is case-sensitive");
    }

    #[test]
    fn record_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordType::Forecast).unwrap(),
            "\"forecast\""
        );
    }

    #[test]
    fn partition_splits_five_historical_three_forecast() {
        let mut records = Vec::new();
        for day in 1..=5 {
            records.push(record(&format!("2024-01-0{}", day), RecordType::Historical, None));
        }
        for day in 1..=3 {
            records.push(record(
                &format!("2024-02-0{}", day),
                RecordType::Forecast,
                Some((15.0, 9.0)),
            ));
        }

        let (historical, forecast) = partition_series(&records);
        assert_eq!(historical.len(), 5);
        assert_eq!(forecast.len(), 3);
        for f in &forecast {
            assert!(f.yhat_upper.is_some(), "forecast rows keep their upper bound");
            assert!(f.yhat_lower.is_some(), "forecast rows keep their lower bound");
        }
    }

    #[test]
    fn partition_preserves_input_order() {
        let records = vec![
            record("2024-01-03", RecordType::Historical, None),
            record("2024-01-01", RecordType::Forecast, Some((1.0, 0.0))),
            record("2024-01-02", RecordType::Historical, None),
        ];
        let (historical, forecast) = partition_series(&records);
        assert_eq!(historical[0].ds, "2024-01-03");
        assert_eq!(historical[1].ds, "2024-01-02");
        assert_eq!(forecast[0].ds, "2024-01-01");
    }

    #[test]
    fn partition_of_empty_input_is_empty() {
        let (historical, forecast) = partition_series(&[]);
        assert!(historical.is_empty());
        assert!(forecast.is_empty());
    }
}
