use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{DayView, HomeView, Sidebar};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/day/:index", DayView)] Day { index: usize },
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
