mod courses_vm;

pub use courses_vm::{
    CourseCardVm, CoursesIntent, CoursesVm, DifficultyTier, FOCUS_AREA_LIMIT, FocusAreasVm,
    ProgressVm,
};
