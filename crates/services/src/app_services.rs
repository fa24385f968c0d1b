use std::path::Path;
use std::sync::Arc;

use storage::repository::Storage;
use upskill_core::model::Catalog;

use crate::catalog_source::load_catalog;
use crate::course_service::CourseService;
use crate::error::AppServicesError;
use crate::gap_reader::GapReader;

/// Assembles app-facing services over one storage backend and catalog.
#[derive(Clone)]
pub struct AppServices {
    gap_reader: Arc<GapReader>,
    course_service: Arc<CourseService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or catalog loading fails.
    pub async fn new_sqlite(
        db_url: &str,
        catalog_path: Option<&Path>,
    ) -> Result<Self, AppServicesError> {
        let catalog = load_catalog(catalog_path)?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(&storage, catalog))
    }

    /// Build services over an existing storage and catalog.
    #[must_use]
    pub fn from_parts(storage: &Storage, catalog: Catalog) -> Self {
        let gap_reader = Arc::new(GapReader::new(Arc::clone(&storage.local)));
        let course_service = Arc::new(CourseService::new(
            Arc::new(catalog),
            gap_reader.as_ref().clone(),
        ));
        Self {
            gap_reader,
            course_service,
        }
    }

    #[must_use]
    pub fn gap_reader(&self) -> Arc<GapReader> {
        Arc::clone(&self.gap_reader)
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}
