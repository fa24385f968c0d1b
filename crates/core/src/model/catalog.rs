use std::collections::HashSet;

use thiserror::Error;

use crate::model::course::{Course, CourseDraft, CourseError, Difficulty};
use crate::model::ids::CourseId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate course id: {0}")]
    DuplicateId(CourseId),

    #[error("invalid course {id:?}: {source}")]
    InvalidCourse {
        id: String,
        #[source]
        source: CourseError,
    },
}

/// The full, fixed set of offered courses. Ids are unique; order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog from validated courses.
    ///
    /// Every course is stored as a fresh `NotStarted` template.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(course.id().clone()) {
                return Err(CatalogError::DuplicateId(course.id().clone()));
            }
        }
        let courses = courses.iter().map(Course::fresh_copy).collect();
        Ok(Self { courses })
    }

    /// Validate drafts (e.g. read from a catalog file) and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidCourse` for the first draft that fails
    /// validation, or `CatalogError::DuplicateId`.
    pub fn from_drafts(drafts: Vec<CourseDraft>) -> Result<Self, CatalogError> {
        let courses = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id.clone();
                draft
                    .validate()
                    .map_err(|source| CatalogError::InvalidCourse { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(courses)
    }

    /// The catalog shipped with the app.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in records are edited into an invalid state.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_drafts(builtin_drafts())
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn draft(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    difficulty: Difficulty,
    video_url: &str,
    skills: &[&str],
) -> CourseDraft {
    CourseDraft {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        duration: duration.to_owned(),
        difficulty,
        video_url: video_url.to_owned(),
        skills: skills.iter().map(|skill| (*skill).to_owned()).collect(),
    }
}

fn builtin_drafts() -> Vec<CourseDraft> {
    vec![
        draft(
            "1",
            "JavaScript Fundamentals",
            "Master the basics of JavaScript including variables, functions, and DOM manipulation.",
            "4h 30m",
            Difficulty::Beginner,
            "https://example.com/js-fundamentals",
            &["JavaScript (ES6+)", "DOM Manipulation"],
        ),
        draft(
            "2",
            "React Component Architecture",
            "Learn to build scalable React applications with proper component design patterns.",
            "6h 15m",
            Difficulty::Intermediate,
            "https://example.com/react-components",
            &["React.js", "State Management (Redux/Context)"],
        ),
        draft(
            "3",
            "RESTful API Development",
            "Build robust APIs using Node.js and Express with proper HTTP methods and status codes.",
            "5h 45m",
            Difficulty::Intermediate,
            "https://example.com/api-development",
            &["Node.js & Express", "RESTful APIs"],
        ),
        draft(
            "4",
            "Database Design Principles",
            "Understand relational and NoSQL database design, normalization, and optimization.",
            "3h 20m",
            Difficulty::Beginner,
            "https://example.com/database-design",
            &["Database Design (SQL/NoSQL)"],
        ),
    ]
}
