use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ChecklistSection, ProgressBar, ProgressState};
use crate::vm::map_day;

#[component]
pub fn DayView(index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context::<ProgressState>();
    let navigator = use_navigator();
    let schedule = ctx.schedule();
    let store = progress.store();

    let Some(vm) = map_day(&schedule, index, &store.read()) else {
        return rsx! {
            div { class: "page",
                h2 { "Day not found" }
                if schedule.is_empty() {
                    p { "The schedule has no days yet." }
                } else {
                    p { "Pick a day from the list." }
                }
            }
        };
    };

    let title = ctx.title().to_owned();

    rsx! {
        div { class: "page day-page",
            header { class: "view-header",
                h2 { class: "view-title", "{title}" }
                p { class: "view-subtitle", "Lectures and Projects for Each Day" }
            }
            div { class: "view-divider" }

            label { class: "day-select",
                span { class: "day-select-label", "Select a Day" }
                select {
                    class: "day-select-input",
                    value: "{vm.index}",
                    onchange: move |evt| {
                        if let Ok(index) = evt.value().parse::<usize>() {
                            let _ = navigator.push(Route::Day { index });
                        }
                    },
                    for day_option in vm.options.iter() {
                        option {
                            key: "{day_option.index}",
                            value: "{day_option.index}",
                            selected: day_option.index == vm.index,
                            "{day_option.label}"
                        }
                    }
                }
            }

            ChecklistSection {
                title: format!("Lectures for {}", vm.day),
                empty_message: "No lectures scheduled for this day.",
                items: vm.lectures.clone(),
            }
            ChecklistSection {
                title: format!("Projects for {}", vm.day),
                empty_message: "No projects scheduled for this day.",
                items: vm.projects.clone(),
            }

            section { class: "day-progress",
                h3 { "Progress for {vm.day}" }
                ProgressBar { progress: vm.progress.clone() }
            }
        }
    }
}
