use services::CoursesPage;
use upskill_core::WorkingList;
use upskill_core::model::{Course, CourseId, Difficulty, GapList};

/// How many gap skills the focus-areas panel lists before collapsing the rest.
pub const FOCUS_AREA_LIMIT: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoursesIntent {
    StartCourse(CourseId),
    Finish,
}

/// Visual tier for a difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
    Neutral,
}

impl DifficultyTier {
    #[must_use]
    pub fn from_difficulty(difficulty: &Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => Self::Beginner,
            Difficulty::Intermediate => Self::Intermediate,
            Difficulty::Advanced => Self::Advanced,
            Difficulty::Other(_) => Self::Neutral,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Beginner => "badge difficulty difficulty--beginner",
            Self::Intermediate => "badge difficulty difficulty--intermediate",
            Self::Advanced => "badge difficulty difficulty--advanced",
            Self::Neutral => "badge difficulty difficulty--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    pub value: f64,
    pub badge_label: String,
    pub percent_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusAreasVm {
    pub skills: Vec<String>,
    pub overflow_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty_label: String,
    pub difficulty_tier: DifficultyTier,
    pub skills: Vec<String>,
    pub completed: bool,
    pub action_label: &'static str,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        let completed = course.is_completed();
        Self {
            id: course.id().clone(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            duration: course.duration().to_owned(),
            difficulty_label: course.difficulty().label().to_owned(),
            difficulty_tier: DifficultyTier::from_difficulty(course.difficulty()),
            skills: course.skills().to_vec(),
            completed,
            action_label: if completed { "Completed" } else { "Start Course" },
        }
    }
}

/// Page state for the courses view: the gap list plus the working list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoursesVm {
    gaps: GapList,
    courses: WorkingList,
}

impl CoursesVm {
    #[must_use]
    pub fn new(gaps: GapList, courses: WorkingList) -> Self {
        Self { gaps, courses }
    }

    #[must_use]
    pub fn from_page(page: CoursesPage) -> Self {
        Self::new(page.gaps, page.courses)
    }

    #[must_use]
    pub fn courses(&self) -> &WorkingList {
        &self.courses
    }

    /// Returns true if the id belongs to a course on the page.
    pub fn start_course(&mut self, id: &CourseId) -> bool {
        self.courses.complete_course(id)
    }

    #[must_use]
    pub fn progress(&self) -> ProgressVm {
        let completed = self.courses.completed_count();
        let total = self.courses.total();
        ProgressVm {
            completed,
            total,
            value: self.courses.overall_progress(),
            badge_label: format!("{completed}/{total} Completed"),
            percent_label: format!(
                "{}% of recommended courses completed",
                self.courses.rounded_progress()
            ),
        }
    }

    /// `None` when there are no stored gap skills.
    #[must_use]
    pub fn focus_areas(&self) -> Option<FocusAreasVm> {
        if self.gaps.is_empty() {
            return None;
        }
        let preview = self.gaps.preview(FOCUS_AREA_LIMIT);
        Some(FocusAreasVm {
            skills: preview.shown.to_vec(),
            overflow_label: (preview.hidden > 0).then(|| format!("+{} more", preview.hidden)),
        })
    }

    #[must_use]
    pub fn course_cards(&self) -> Vec<CourseCardVm> {
        self.courses.courses().iter().map(CourseCardVm::from).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn show_finish(&self) -> bool {
        self.courses.is_finished()
    }
}
