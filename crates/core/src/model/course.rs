use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::gap::GapList;
use crate::model::ids::CourseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("skill names cannot be empty")]
    EmptySkill,

    #[error("skill listed twice: {0}")]
    DuplicateSkill(String),

    #[error("invalid video URL: {0}")]
    InvalidVideoUrl(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty label attached to a course.
///
/// Labels outside the three known levels are kept verbatim in `Other` so a
/// catalog never fails to load over a cosmetic field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Other(label) => label,
        }
    }

    /// Returns true for the three recognized levels.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Difficulty::Other(_))
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            "Advanced" => Difficulty::Advanced,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Per-course completion state. The only transition is `NotStarted -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseStatus {
    #[default]
    NotStarted,
    Completed,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course record, as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub video_url: String,
    pub skills: Vec<String>,
}

impl CourseDraft {
    /// Validate the draft into a `Course` that has not been started.
    ///
    /// Skill names are trimmed, since gap matching is exact.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the id, title or a skill name is blank, if a
    /// skill is listed twice, or if the video URL does not parse.
    pub fn validate(self) -> Result<Course, CourseError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CourseError::EmptyId);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        let mut skills: Vec<String> = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            let skill = skill.trim();
            if skill.is_empty() {
                return Err(CourseError::EmptySkill);
            }
            if skills.iter().any(|seen| seen == skill) {
                return Err(CourseError::DuplicateSkill(skill.to_owned()));
            }
            skills.push(skill.to_owned());
        }
        let video_url = Url::parse(self.video_url.trim())
            .map_err(|_| CourseError::InvalidVideoUrl(self.video_url.clone()))?;

        Ok(Course {
            id: CourseId::new(id),
            title: title.to_owned(),
            description: self.description,
            duration: self.duration,
            difficulty: self.difficulty,
            video_url,
            skills,
            status: CourseStatus::NotStarted,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    duration: String,
    difficulty: Difficulty,
    video_url: Url,
    skills: Vec<String>,
    status: CourseStatus,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Display string such as `4h 30m`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    #[must_use]
    pub fn video_url(&self) -> &Url {
        &self.video_url
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn status(&self) -> CourseStatus {
        self.status
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == CourseStatus::Completed
    }

    /// Mark the course completed. Calling it again leaves it completed.
    pub fn mark_completed(&mut self) {
        self.status = CourseStatus::Completed;
    }

    /// Returns a copy of this course reset to `NotStarted`.
    #[must_use]
    pub fn fresh_copy(&self) -> Self {
        Self {
            status: CourseStatus::NotStarted,
            ..self.clone()
        }
    }

    /// True if any of this course's skills is in the gap list (exact, case-sensitive).
    #[must_use]
    pub fn targets(&self, gaps: &GapList) -> bool {
        self.skills.iter().any(|skill| gaps.contains(skill))
    }
}
