//! Typed query methods for retrieving telemetry data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.
//!
//! Filtering is exact string equality on the three dimension columns
//! (municipio AND operator AND variable). A selection combination with no
//! matching rows returns an empty vec, never an error; the renderers degrade
//! to an empty chart or map.

use crate::models::{CellMedian, SeriesRecord};
use crate::Database;
use rusqlite::params;

impl Database {
    // ───────────────────── Selector Queries ─────────────────────

    /// Distinct municipios in first-appearance order.
    ///
    /// Selector lists deliberately preserve the order values first occur in
    /// the source table rather than sorting, so the default selection (the
    /// first entry) matches the upstream export's leading rows.
    pub fn query_municipios(&self) -> anyhow::Result<Vec<String>> {
        self.distinct_dimension(
            "SELECT municipio FROM timeseries GROUP BY municipio ORDER BY MIN(rowid)",
        )
    }

    /// Distinct network operators in first-appearance order.
    pub fn query_operators(&self) -> anyhow::Result<Vec<String>> {
        self.distinct_dimension(
            "SELECT operator FROM timeseries GROUP BY operator ORDER BY MIN(rowid)",
        )
    }

    /// Distinct metric codes in first-appearance order.
    pub fn query_variables(&self) -> anyhow::Result<Vec<String>> {
        self.distinct_dimension(
            "SELECT variable FROM timeseries GROUP BY variable ORDER BY MIN(rowid)",
        )
    }

    fn distinct_dimension(&self, sql: &str) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Filter Queries ─────────────────────

    /// Get the time-series subset for one (municipio, operator, variable)
    /// selection, ordered by date ascending.
    ///
    /// Returns both historical and forecast rows; use
    /// [`models::partition_series`](crate::models::partition_series) to split
    /// them for charting.
    pub fn query_series(
        &self,
        municipio: &str,
        operator: &str,
        variable: &str,
    ) -> anyhow::Result<Vec<SeriesRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT ds, municipio, operator, variable, record_type, y, yhat_upper, yhat_lower
             FROM timeseries
             WHERE municipio = ?1 AND operator = ?2 AND variable = ?3
             ORDER BY ds",
        )?;
        let rows = stmt
            .query_map(params![municipio, operator, variable], |row| {
                Ok(SeriesRecord {
                    ds: row.get(0)?,
                    municipio: row.get(1)?,
                    operator: row.get(2)?,
                    variable: row.get(3)?,
                    record_type: row.get(4)?,
                    y: row.get(5)?,
                    yhat_upper: row.get(6)?,
                    yhat_lower: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_series returned {} records", rows.len());
        Ok(rows)
    }

    /// Get the per-cell median subset for one (municipio, operator, variable)
    /// selection, ordered by cell id.
    pub fn query_medians(
        &self,
        municipio: &str,
        operator: &str,
        variable: &str,
    ) -> anyhow::Result<Vec<CellMedian>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT h3_08, municipio, operator, variable, median
             FROM h3_medians
             WHERE municipio = ?1 AND operator = ?2 AND variable = ?3
             ORDER BY h3_08",
        )?;
        let rows = stmt
            .query_map(params![municipio, operator, variable], |row| {
                Ok(CellMedian {
                    h3_08: row.get(0)?,
                    municipio: row.get(1)?,
                    operator: row.get(2)?,
                    variable: row.get(3)?,
                    median: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_medians returned {} records", rows.len());
        Ok(rows)
    }
}
