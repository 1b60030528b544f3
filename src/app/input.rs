//! Input loading for the CLI.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error_handling::InputError;
use crate::geo::{lenient, GeoRecord};

/// An entity related to a neighborhood (e.g. a field team).
///
/// Only the neighborhood is read; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedEntity {
    /// Neighborhood the entity works in
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub neighborhood: Option<String>,
}

fn load_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| InputError::Json {
        path: display,
        source,
    })
}

/// Loads a JSON array of registrations.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read or is not a JSON array of
/// records. Records with bad coordinates are kept; clustering filters them.
pub fn load_records(path: &Path) -> Result<Vec<GeoRecord>, InputError> {
    let records: Vec<GeoRecord> = load_json_array(path)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads a JSON array of related entities and returns their neighborhoods.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read or parsed.
pub fn load_related_keys(path: &Path) -> Result<Vec<Option<String>>, InputError> {
    let entities: Vec<RelatedEntity> = load_json_array(path)?;
    Ok(entities.into_iter().map(|e| e.neighborhood).collect())
}
