//! Per-session completion tracking over the recommended courses.

use crate::model::{Course, CourseId};

/// Mutable, per-session copy of the recommended courses.
///
/// Aggregates are computed from the list on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingList {
    courses: Vec<Course>,
}

impl WorkingList {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Mark the course with `id` completed.
    ///
    /// Returns true if a course with that id exists. Unknown ids and repeated
    /// calls leave the list unchanged.
    pub fn complete_course(&mut self, id: &CourseId) -> bool {
        match self.courses.iter_mut().find(|course| course.id() == id) {
            Some(course) => {
                course.mark_completed();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.courses.iter().filter(|course| course.is_completed()).count()
    }

    /// Percentage of completed courses in `0.0..=100.0`; 0 for an empty list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_progress(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / total as f64 * 100.0
    }

    /// `overall_progress` rounded half-up for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_progress(&self) -> u32 {
        (self.overall_progress() + 0.5).floor() as u32
    }

    /// Non-empty and every course completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.courses.is_empty() && self.courses.iter().all(Course::is_completed)
    }
}
