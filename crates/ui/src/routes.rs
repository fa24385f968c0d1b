use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CompletionView, CoursesView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CoursesView)] Courses {},
        #[route("/completion", CompletionView)] Completion {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Upskill" }
            ul {
                li { Link { to: Route::Courses {}, "Courses" } }
                li { Link { to: Route::Completion {}, "Summary" } }
            }
        }
    }
}
