mod completion;
mod courses;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use completion::CompletionView;
pub use courses::CoursesView;
pub use state::{ViewError, ViewState, view_state_from_resource};
