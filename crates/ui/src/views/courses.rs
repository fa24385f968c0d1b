use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, CoursesIntent, CoursesVm, FocusAreasVm, ProgressVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let course_service = ctx.course_service();
    let vm = use_signal(|| None::<CoursesVm>);

    let resource = use_resource(move || {
        let course_service = course_service.clone();
        let mut vm = vm;
        async move {
            let page = course_service.load_page().await.map_err(|err| {
                warn!(error = %err, "failed to load courses page");
                ViewError::Unknown
            })?;
            vm.set(Some(CoursesVm::from_page(page)));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = use_callback(move |intent: CoursesIntent| {
        let mut vm = vm;
        match intent {
            CoursesIntent::StartCourse(id) => {
                if let Some(vm) = vm.write().as_mut() {
                    if vm.start_course(&id) {
                        info!(course = %id, "course completed");
                    }
                }
            }
            CoursesIntent::Finish => {
                info!("all recommended courses completed");
                let _ = navigator.push(Route::Completion {});
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CoursesTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "Recommended Courses" }
                p { class: "view-subtitle",
                    "Curated learning content based on your skill assessment. Start with any course that interests you."
                }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => {
                    let guard = vm.read();
                    match guard.as_ref() {
                        None => rsx! {
                            p { "Loading..." }
                        },
                        Some(page) => {
                            let progress = page.progress();
                            let focus = page.focus_areas();
                            let cards = page.course_cards();
                            let is_empty = page.is_empty();
                            let show_finish = page.show_finish();
                            rsx! {
                                ProgressPanel { summary: progress }
                                if let Some(focus) = focus {
                                    FocusAreas { focus }
                                }
                                div { class: "course-grid",
                                    for card in cards {
                                        CourseCard { key: "{card.id}", card: card.clone(), on_intent: dispatch_intent }
                                    }
                                }
                                if is_empty {
                                    EmptyCourses {}
                                }
                                if show_finish {
                                    div { class: "courses-finish",
                                        button {
                                            class: "btn btn-primary btn-lg",
                                            r#type: "button",
                                            onclick: move |_| dispatch_intent.call(CoursesIntent::Finish),
                                            "🎉 Finish and View Summary"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressPanel(summary: ProgressVm) -> Element {
    rsx! {
        section { class: "card progress-card",
            div { class: "card-header",
                h3 { class: "card-title", "Learning Progress" }
                span { class: "badge badge-secondary", "{summary.badge_label}" }
            }
            progress { class: "progress-bar", max: "100", value: "{summary.value}" }
            p { class: "card-caption", "{summary.percent_label}" }
        }
    }
}

#[component]
fn FocusAreas(focus: FocusAreasVm) -> Element {
    rsx! {
        section { class: "card focus-card",
            h3 { class: "focus-title", "Focus Areas" }
            p { class: "focus-body", "These courses target your identified skill gaps:" }
            div { class: "focus-skills",
                // Stored gap lists may repeat a skill, so key by position.
                for (index, skill) in focus.skills.iter().enumerate() {
                    span { key: "{index}", class: "badge badge-outline", "{skill}" }
                }
                if let Some(label) = focus.overflow_label.as_ref() {
                    span { class: "badge badge-outline", "{label}" }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_intent: Callback<CoursesIntent>) -> Element {
    let card_class = if card.completed {
        "card course-card course-card--completed"
    } else {
        "card course-card"
    };
    let button_class = if card.completed {
        "btn btn-secondary course-action"
    } else {
        "btn btn-primary course-action"
    };
    let id = card.id.clone();

    rsx! {
        article { class: card_class,
            div { class: "course-card-header",
                div { class: "course-card-text",
                    h4 { class: "course-title", "{card.title}" }
                    p { class: "course-description", "{card.description}" }
                }
                if card.completed {
                    span { class: "badge badge-success", "✓ Completed" }
                }
            }
            div { class: "course-meta",
                span { class: card.difficulty_tier.class(), "{card.difficulty_label}" }
                span { class: "course-duration", "📺 {card.duration}" }
            }
            div { class: "course-skills",
                h5 { class: "course-skills-title", "Skills Covered" }
                div { class: "course-skill-list",
                    for skill in card.skills.iter() {
                        span { key: "{skill}", class: "badge badge-secondary badge-sm", "{skill}" }
                    }
                }
            }
            button {
                class: button_class,
                r#type: "button",
                disabled: card.completed,
                onclick: move |_| on_intent.call(CoursesIntent::StartCourse(id.clone())),
                "{card.action_label}"
            }
        }
    }
}

#[component]
fn EmptyCourses() -> Element {
    rsx! {
        section { class: "card empty-card",
            div { class: "empty-icon", "📚" }
            h3 { "No Courses Available" }
            p { "Complete your skill assessment to get personalized course recommendations." }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CoursesTestHandles {
    dispatch: Rc<RefCell<Option<Callback<CoursesIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<CoursesVm>>>>>,
}

#[cfg(test)]
impl CoursesTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<CoursesIntent>,
        vm: Signal<Option<CoursesVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<CoursesIntent> {
        (*self.dispatch.borrow()).expect("courses dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<CoursesVm>> {
        (*self.vm.borrow()).expect("courses vm registered")
    }
}
