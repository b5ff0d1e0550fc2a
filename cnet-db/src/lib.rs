//! In-memory SQLite database layer for CDMX LTE telemetry data.
//!
//! This crate provides a shared database abstraction that loads CSV data
//! into an in-memory SQLite database and exposes typed query methods for
//! consumption by the Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use cnet_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_timeseries("ds,municipio,operator,variable,type,y,yhat_upper,yhat_lower\n2024-01-01,Cuauhtémoc,AT&T,m_download_mbps,historical,12.5,,\n").unwrap();
//! db.load_medians("h3_08,municipio,operator,variable,median\n884995b4c1fffff,Cuauhtémoc,AT&T,m_download_mbps,14.2\n").unwrap();
//!
//! // Query typed results
//! let municipios = db.query_municipios().unwrap();
//! let series = db.query_series("Cuauhtémoc", "AT&T", "m_download_mbps").unwrap();
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `timeseries` - Daily metric values per (municipio, operator, variable),
//!   historical observations plus the 3-month forecast with its bounds
//! - `h3_medians` - Median metric value per H3 resolution-8 cell
//!
//! All data is read-only after load; the dashboard never mutates rows.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the CDMX LTE telemetry tables.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use cnet_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_medians("h3_08,municipio,operator,variable,median\n884995b4c1fffff,Coyoacán,Telcel,m_latency_ms,38.0\n").unwrap();
/// let medians = db.query_medians("Coyoacán", "Telcel", "m_latency_ms").unwrap();
/// assert_eq!(medians.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_medians(
            "h3_08,municipio,operator,variable,median\n884995b4c1fffff,Cuauhtémoc,AT&T,m_download_mbps,14.2\n",
        )
        .unwrap();
        let medians = db2.query_medians("Cuauhtémoc", "AT&T", "m_download_mbps").unwrap();
        assert_eq!(
            medians.len(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let municipios = db.query_municipios().unwrap();
        assert!(municipios.is_empty(), "New database should have no timeseries rows");
    }
}
