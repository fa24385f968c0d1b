use std::sync::Arc;

use services::CourseService;

pub trait UiApp: Send + Sync {
    fn course_service(&self) -> Arc<CourseService>;
}

#[derive(Clone)]
pub struct AppContext {
    course_service: Arc<CourseService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_service: app.course_service(),
        }
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
