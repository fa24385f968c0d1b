use std::sync::Arc;

use tracing::{debug, warn};
use upskill_core::model::{Catalog, GapList};
use upskill_core::{WorkingList, recommend};

use crate::error::{CourseServiceError, GapReaderError};
use crate::gap_reader::GapReader;

/// Everything the courses page needs at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursesPage {
    pub gaps: GapList,
    pub courses: WorkingList,
    /// True when no course matched the gap list and the full catalog is shown.
    pub fallback: bool,
}

/// Combines the catalog with the stored gap list.
#[derive(Clone)]
pub struct CourseService {
    catalog: Arc<Catalog>,
    gaps: GapReader,
}

impl CourseService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, gaps: GapReader) -> Self {
        Self { catalog, gaps }
    }

    /// Read the gap list and build a fresh working list of recommended courses.
    ///
    /// A malformed stored gap list is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if the store cannot be read.
    pub async fn load_page(&self) -> Result<CoursesPage, CourseServiceError> {
        let gaps = match self.gaps.load_gap_skills().await {
            Ok(gaps) => gaps,
            Err(GapReaderError::Storage(err)) => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable gap list");
                GapList::empty()
            }
        };

        let recommendation = recommend(&self.catalog, &gaps);
        let fallback = recommendation.is_fallback();
        debug!(
            gaps = gaps.len(),
            courses = recommendation.courses().len(),
            fallback,
            "built course recommendation"
        );

        Ok(CoursesPage {
            gaps,
            courses: recommendation.into_working_list(),
            fallback,
        })
    }
}
