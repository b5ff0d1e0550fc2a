//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the two telemetry tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `timeseries` - One row per (ds, municipio, operator, variable, record_type):
///   the daily metric value plus forecast bounds on forecast rows. The `ds`
///   column holds normalized `YYYY-MM-DD` dates, so lexicographic `ORDER BY ds`
///   is chronological.
/// - `h3_medians` - One row per (h3_08, municipio, operator, variable): the
///   median metric value aggregated over an H3 resolution-8 cell.
///
/// Distinct selector values (municipios, operators, variables) are derived
/// on-the-fly via `GROUP BY` queries against `timeseries`.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS timeseries (
        ds TEXT NOT NULL,
        municipio TEXT NOT NULL,
        operator TEXT NOT NULL,
        variable TEXT NOT NULL,
        record_type TEXT NOT NULL,
        y REAL NOT NULL,
        yhat_upper REAL,
        yhat_lower REAL,
        PRIMARY KEY (ds, municipio, operator, variable, record_type)
    );
    CREATE INDEX IF NOT EXISTS idx_ts_dims ON timeseries(municipio, operator, variable);
    CREATE INDEX IF NOT EXISTS idx_ts_ds ON timeseries(ds);

    CREATE TABLE IF NOT EXISTS h3_medians (
        h3_08 TEXT NOT NULL,
        municipio TEXT NOT NULL,
        operator TEXT NOT NULL,
        variable TEXT NOT NULL,
        median REAL NOT NULL,
        PRIMARY KEY (h3_08, municipio, operator, variable)
    );
    CREATE INDEX IF NOT EXISTS idx_med_dims ON h3_medians(municipio, operator, variable);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = ["timeseries", "h3_medians"];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_indexes = ["idx_ts_dims", "idx_ts_ds", "idx_med_dims"];

        for idx in &expected_indexes {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='{}'",
                        idx
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
