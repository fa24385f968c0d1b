use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CourseService, GapReader};
use storage::repository::Storage;
use upskill_core::model::Catalog;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::courses::CoursesTestHandles;
use crate::views::{CompletionView, CoursesView};

#[derive(Clone)]
struct TestApp {
    course_service: Arc<CourseService>,
}

impl UiApp for TestApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Courses,
    Completion,
    /// The app router starting at the courses page.
    Routed,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    courses_handles: Option<CoursesTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.courses_handles.clone() {
        use_context_provider(|| handles);
    }
    match props.view {
        ViewKind::Routed => rsx! { Router::<Route> {} },
        ViewKind::Courses | ViewKind::Completion => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Completion | ViewKind::Routed => rsx! { CompletionView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub courses_handles: Option<CoursesTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Mount the view and let the page resource resolve.
    pub async fn mount(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Store `skills` as the gap list before the view mounts.
pub async fn seed_gap_skills(storage: &Storage, skills: &[&str]) {
    let skills: Vec<String> = skills.iter().map(|skill| (*skill).to_owned()).collect();
    GapReader::new(Arc::clone(&storage.local))
        .save_gap_skills(&skills)
        .await
        .expect("seed gap skills");
}

pub fn setup_view_harness(view: ViewKind, storage: Storage) -> ViewHarness {
    let catalog = Catalog::builtin().expect("builtin catalog");
    setup_view_harness_with_catalog(view, storage, catalog)
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    storage: Storage,
    catalog: Catalog,
) -> ViewHarness {
    let services = AppServices::from_parts(&storage, catalog);
    let courses_handles = match view {
        ViewKind::Courses | ViewKind::Routed => Some(CoursesTestHandles::default()),
        ViewKind::Completion => None,
    };

    let app = Arc::new(TestApp {
        course_service: services.course_service(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            courses_handles: courses_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        courses_handles,
    }
}
