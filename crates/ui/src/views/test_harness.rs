use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::{NoOpMutations, ScopeId};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, ProgressService};
use storage::repository::InMemoryRepository;
use tracker_core::model::{ItemKey, ProgressStore, Schedule, ScheduleRow};
use tracker_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{DayView, HomeView, ProgressState, Sidebar, use_progress_state_provider};

#[derive(Clone)]
struct TestApp {
    schedule: Arc<Schedule>,
    progress: ProgressStore,
    progress_service: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Test Schedule".to_owned()
    }

    fn schedule(&self) -> Arc<Schedule> {
        Arc::clone(&self.schedule)
    }

    fn initial_progress(&self) -> ProgressStore {
        self.progress.clone()
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Day(usize),
    Sidebar,
}

#[derive(Clone, Default)]
struct HarnessHandles {
    progress: Rc<RefCell<Option<ProgressState>>>,
}

impl HarnessHandles {
    fn progress(&self) -> ProgressState {
        (*self.progress.borrow()).expect("progress state registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let progress = use_progress_state_provider(&ctx);
    use_context_provider(|| props.view);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.progress.borrow_mut() = Some(progress);
    }
    rsx! { Router::<TestRoute> {} }
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
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Day(index) => rsx! { DayView { index } },
        ViewKind::Sidebar => rsx! { Sidebar {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    service: Arc<ProgressService>,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Same path as a checkbox change event.
    pub fn set_completed(&mut self, key: ItemKey, completed: bool) {
        let progress = self.handles.progress();
        let service = Arc::clone(&self.service);
        self.dom.in_scope(ScopeId::ROOT, || {
            progress.set_completed(&service, key, completed);
        });
        self.settle();
    }

    /// Same path as the sidebar reset button.
    pub fn reset(&mut self) {
        let progress = self.handles.progress();
        let service = Arc::clone(&self.service);
        self.dom.in_scope(ScopeId::ROOT, || progress.reset(&service));
        self.settle();
    }

    /// Runs the spawned save, then renders the status it leaves behind.
    fn settle(&mut self) {
        drive_dom(&mut self.dom);
        drive_dom(&mut self.dom);
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

pub fn row(day: &str, lecture: Option<&str>, project: Option<&str>) -> ScheduleRow {
    ScheduleRow::new(day, lecture.map(str::to_owned), project.map(str::to_owned))
}

pub fn setup_view_harness(
    view: ViewKind,
    rows: Vec<ScheduleRow>,
    progress: ProgressStore,
) -> ViewHarness {
    let repo = InMemoryRepository::with_rows(rows.clone());
    let schedule = Arc::new(Schedule::from_rows(rows).expect("valid schedule"));
    let progress_service = Arc::new(ProgressService::new(
        Clock::fixed(fixed_now()),
        Arc::new(repo.clone()),
    ));

    let app = Arc::new(TestApp {
        schedule,
        progress,
        progress_service: Arc::clone(&progress_service),
    });
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        repo,
        service: progress_service,
        handles,
    }
}
