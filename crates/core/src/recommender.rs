//! Catalog filtering against the gap list.

use crate::model::{Catalog, Course, GapList};
use crate::progress::WorkingList;

/// Courses selected for display, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    courses: Vec<Course>,
    fallback: bool,
}

impl Recommendation {
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// True when nothing matched and the full catalog was returned instead.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn into_working_list(self) -> WorkingList {
        WorkingList::new(self.courses)
    }
}

/// Select the catalog courses that target at least one gap skill.
///
/// When no course matches (including an empty gap list) the whole catalog is
/// returned unchanged, so the page is only empty if the catalog is.
#[must_use]
pub fn recommend(catalog: &Catalog, gaps: &GapList) -> Recommendation {
    let matched: Vec<Course> = catalog
        .courses()
        .iter()
        .filter(|course| course.targets(gaps))
        .map(Course::fresh_copy)
        .collect();

    if matched.is_empty() {
        Recommendation {
            courses: catalog.courses().iter().map(Course::fresh_copy).collect(),
            fallback: true,
        }
    } else {
        Recommendation {
            courses: matched,
            fallback: false,
        }
    }
}
