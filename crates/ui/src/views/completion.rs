use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn CompletionView() -> Element {
    rsx! {
        div { class: "page completion-page",
            header { class: "view-header",
                h2 { class: "view-title", "Learning Summary" }
                p { class: "view-subtitle",
                    "Nice work. You finished every course recommended for your skill gaps."
                }
            }
            Link { class: "btn btn-secondary", to: Route::Courses {}, "Back to Courses" }
        }
    }
}
