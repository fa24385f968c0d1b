//! Catalog selection: the built-in list or a JSON file with the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use upskill_core::model::{Catalog, CourseDraft};

use crate::error::CatalogLoadError;

/// On-disk catalog layout: `{ "courses": [ { "id": "1", "title": ..., "videoUrl": ... } ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub courses: Vec<CourseDraft>,
}

/// Load the catalog from `path`, or the built-in catalog when `path` is `None`.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the file cannot be read or parsed, or if a
/// course in it is invalid.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin()?);
    };

    let shown = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: shown.clone(),
        source,
    })?;
    let file: CatalogFile =
        serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
            path: shown.clone(),
            source,
        })?;
    let catalog = Catalog::from_drafts(file.courses)?;
    info!(path = %shown, courses = catalog.len(), "loaded catalog file");
    Ok(catalog)
}
