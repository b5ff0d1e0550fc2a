//! H3 cell geometry handling for the CDMX choropleth map.
//!
//! The map geometry ships as a GeoJSON FeatureCollection of hexagonal H3
//! resolution-8 cells, each carrying a `properties.h3_08` id that joins
//! against the `h3_medians` table. This crate validates the collection once
//! at load time and keeps the raw JSON around; D3 consumes the geometry
//! verbatim, so there is no need to decode coordinates on the Rust side.

use serde_json::Value;

/// Feature property that carries the cell id, shared with the median table.
pub const CELL_ID_PROPERTY: &str = "h3_08";

/// A validated GeoJSON FeatureCollection of H3 cells.
///
/// Holds the raw JSON for the JS bridge plus the cell ids extracted from
/// feature properties. Features without a cell id are tolerated; they simply
/// never match a median record and render in the neutral map color.
#[derive(Debug, Clone)]
pub struct CellAtlas {
    raw: String,
    cell_ids: Vec<String>,
    feature_count: usize,
}

#[derive(Debug)]
pub enum AtlasError {
    Json(serde_json::Error),
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for AtlasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtlasError::Json(err) => write!(f, "invalid JSON: {}", err),
            AtlasError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            AtlasError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlasError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        AtlasError::Json(err)
    }
}

impl CellAtlas {
    /// Parse and validate a GeoJSON FeatureCollection.
    ///
    /// Fails if the payload is not valid JSON, is not a FeatureCollection,
    /// or contains a feature without an object body or geometry. A missing
    /// `properties.h3_08` id is not an error.
    pub fn from_geojson_str(payload: &str) -> Result<Self, AtlasError> {
        let value: Value = serde_json::from_str(payload)?;

        if value.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(AtlasError::NotAFeatureCollection);
        }
        let features = value
            .get("features")
            .and_then(Value::as_array)
            .ok_or(AtlasError::NotAFeatureCollection)?;

        let mut cell_ids = Vec::new();
        for (index, feature) in features.iter().enumerate() {
            let obj = feature.as_object().ok_or_else(|| AtlasError::InvalidFeature {
                index,
                reason: "feature is not an object".to_string(),
            })?;
            if !obj.contains_key("geometry") {
                return Err(AtlasError::InvalidFeature {
                    index,
                    reason: "feature has no geometry".to_string(),
                });
            }
            let cell_id = obj
                .get("properties")
                .and_then(Value::as_object)
                .and_then(|props| props.get(CELL_ID_PROPERTY))
                .and_then(Value::as_str);
            if let Some(id) = cell_id {
                if !cell_ids.iter().any(|existing| existing == id) {
                    cell_ids.push(id.to_string());
                }
            }
        }

        log::info!(
            "atlas: parsed {} features, {} distinct cell ids",
            features.len(),
            cell_ids.len()
        );
        Ok(Self {
            raw: payload.to_string(),
            cell_ids,
            feature_count: features.len(),
        })
    }

    /// Distinct cell ids in feature order.
    pub fn cell_ids(&self) -> &[String] {
        &self.cell_ids
    }

    pub fn contains(&self, cell_id: &str) -> bool {
        self.cell_ids.iter().any(|id| id == cell_id)
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn is_empty(&self) -> bool {
        self.feature_count == 0
    }

    /// The original GeoJSON text, handed verbatim to the D3 renderer.
    pub fn raw_json(&self) -> &str {
        &self.raw
    }
}
