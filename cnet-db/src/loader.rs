//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. The CSV formats match the upstream forecast
//! pipeline exports that ship with the dashboard.
//!
//! Load failures are fatal: the dashboard has no partial-functionality mode,
//! so a malformed date or value aborts the whole load and the error surfaces
//! on the page.
//!
//! # CSV Formats
//!
//! - **Time series** (has headers): `ds,municipio,operator,variable,type,y,yhat_upper,yhat_lower`
//! - **H3 medians** (has headers): `h3_08,municipio,operator,variable,median`

use crate::models::RecordType;
use crate::Database;
use anyhow::{bail, Context};
use cnet_utils::dates;
use rusqlite::params;

impl Database {
    /// Load time-series rows from CSV string.
    ///
    /// Expected format (with headers):
    /// `ds,municipio,operator,variable,type,y,yhat_upper,yhat_lower`
    ///
    /// The `ds` column is coerced to a calendar date and re-stored as
    /// `YYYY-MM-DD`; a row whose date does not parse fails the whole load.
    /// `type` must be `historical` or `forecast`. The bound columns may be
    /// empty; bounds appearing on historical rows are discarded so that only
    /// forecast rows carry them.
    ///
    /// # Example CSV
    /// ```text
    /// ds,municipio,operator,variable,type,y,yhat_upper,yhat_lower
    /// 2024-01-01,Cuauhtémoc,AT&T,m_download_mbps,historical,12.5,,
    /// 2024-02-01,Cuauhtémoc,AT&T,m_download_mbps,forecast,13.0,14.0,12.0
    /// ```
    pub fn load_timeseries(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for (idx, result) in rdr.records().enumerate() {
            let r = result?;
            let row = idx + 2; // 1-based, after the header line

            let ds_raw = r.get(0).unwrap_or("").trim();
            let ds = dates::coerce_ds(ds_raw)
                .with_context(|| format!("timeseries row {}: bad date '{}'", row, ds_raw))?;
            let municipio = r.get(1).unwrap_or("").trim();
            let operator = r.get(2).unwrap_or("").trim();
            let variable = r.get(3).unwrap_or("").trim();

            let type_raw = r.get(4).unwrap_or("").trim();
            let record_type = match RecordType::parse(type_raw) {
                Some(t) => t,
                None => bail!("timeseries row {}: unrecognized record type '{}'", row, type_raw),
            };

            let y: f64 = r
                .get(5)
                .unwrap_or("")
                .trim()
                .parse()
                .with_context(|| format!("timeseries row {}: non-numeric value", row))?;

            let upper: Option<f64> = r.get(6).and_then(|s| s.trim().parse().ok());
            let lower: Option<f64> = r.get(7).and_then(|s| s.trim().parse().ok());
            // Bound columns only make sense on forecast rows.
            let (yhat_upper, yhat_lower) = match record_type {
                RecordType::Forecast => (upper, lower),
                RecordType::Historical => (None, None),
            };

            conn.execute(
                "INSERT OR REPLACE INTO timeseries
                 (ds, municipio, operator, variable, record_type, y, yhat_upper, yhat_lower)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    dates::format_ds(&ds),
                    municipio,
                    operator,
                    variable,
                    record_type,
                    y,
                    yhat_upper,
                    yhat_lower
                ],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} timeseries rows", count);
        Ok(())
    }

    /// Load per-cell median rows from CSV string.
    ///
    /// Expected format (with headers): `h3_08,municipio,operator,variable,median`
    ///
    /// # Example CSV
    /// ```text
    /// h3_08,municipio,operator,variable,median
    /// 884995b4c1fffff,Cuauhtémoc,AT&T,m_download_mbps,14.2
    /// ```
    pub fn load_medians(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for (idx, result) in rdr.records().enumerate() {
            let r = result?;
            let row = idx + 2;

            let h3_08 = r.get(0).unwrap_or("").trim();
            let municipio = r.get(1).unwrap_or("").trim();
            let operator = r.get(2).unwrap_or("").trim();
            let variable = r.get(3).unwrap_or("").trim();
            let median: f64 = r
                .get(4)
                .unwrap_or("")
                .trim()
                .parse()
                .with_context(|| format!("h3 medians row {}: non-numeric median", row))?;

            if h3_08.is_empty() {
                bail!("h3 medians row {}: empty cell id", row);
            }

            conn.execute(
                "INSERT OR REPLACE INTO h3_medians (h3_08, municipio, operator, variable, median)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![h3_08, municipio, operator, variable, median],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} h3 median rows", count);
        Ok(())
    }
}
