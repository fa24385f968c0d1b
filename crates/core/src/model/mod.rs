mod catalog;
mod course;
mod gap;
mod ids;

pub use catalog::{Catalog, CatalogError};
pub use course::{Course, CourseDraft, CourseError, CourseStatus, Difficulty};
pub use gap::{GapList, GapPreview};
pub use ids::CourseId;
