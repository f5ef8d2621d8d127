use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ProgressState;
use crate::vm::{ChecklistItemVm, ProgressVm};

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    let fill_class = if progress.is_complete {
        "progress-fill progress-fill--done"
    } else {
        "progress-fill"
    };

    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "{fill_class}", style: "{progress.bar_style}" }
            }
            p { class: "progress-label",
                strong { "{progress.percent_label}% Completed" }
            }
        }
    }
}

#[component]
pub fn ChecklistSection(
    title: String,
    empty_message: &'static str,
    items: Vec<ChecklistItemVm>,
) -> Element {
    rsx! {
        section { class: "checklist",
            h3 { "{title}" }
            if items.is_empty() {
                p { class: "checklist-empty", "{empty_message}" }
            } else {
                ul {
                    for item in items.iter() {
                        ChecklistRow { key: "{item.key}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ChecklistRow(item: ChecklistItemVm) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context::<ProgressState>();
    let service = ctx.progress_service();
    let key = item.key.clone();

    rsx! {
        li { class: "checklist-row",
            input {
                r#type: "checkbox",
                id: "{item.key}",
                checked: item.completed,
                onchange: move |evt: FormEvent| {
                    progress.set_completed(&service, key.clone(), evt.checked());
                },
            }
            if let Some(href) = item.href.as_ref() {
                a { class: "checklist-link", href: "{href}", target: "_blank", "{item.link_label}" }
            } else {
                span { class: "checklist-text", "{item.link_label}" }
            }
        }
    }
}
