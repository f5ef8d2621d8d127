use dioxus::prelude::*;

use crate::views::DayView;

/// Landing page: the first scheduled day.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        DayView { index: 0 }
    }
}
