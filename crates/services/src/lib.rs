#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_source;
pub mod course_service;
pub mod error;
pub mod gap_reader;

pub use app_services::AppServices;
pub use catalog_source::{CatalogFile, load_catalog};
pub use course_service::{CourseService, CoursesPage};
pub use error::{AppServicesError, CatalogLoadError, CourseServiceError, GapReaderError};
pub use gap_reader::{GapReader, UNKNOWN_SKILLS_KEY};
