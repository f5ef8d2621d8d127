use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ProgressBar, ProgressState};
use crate::vm::map_overall;

#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context::<ProgressState>();
    let service = ctx.progress_service();
    let schedule = ctx.schedule();
    let overall = map_overall(&schedule, &progress.store().read());
    let status = progress.save_state().label();

    rsx! {
        nav { class: "sidebar",
            h1 { "Overall Progress" }
            ProgressBar { progress: overall.clone() }
            p { class: "sidebar-counts", "{overall.completed} of {overall.total} items" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| progress.reset(&service),
                "Reset Progress"
            }
            if let Some(label) = status {
                p { class: "save-status", "{label}" }
            }
        }
    }
}
