use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, StudySessionService};
use storage::repository::{Storage, StudySessionRepository};
use study_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{CreateView, DeleteView, ReadView, UpdateView};

#[derive(Clone)]
struct TestApp {
    study_sessions: Arc<StudySessionService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Stream_Study"
    }

    fn study_sessions(&self) -> Arc<StudySessionService> {
        Arc::clone(&self.study_sessions)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
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
        ViewKind::Create => rsx! { CreateView {} },
        ViewKind::Read => rsx! { ReadView {} },
        ViewKind::Update => rsx! { UpdateView {} },
        ViewKind::Delete => rsx! { DeleteView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let sessions = Arc::clone(&storage.sessions);
    setup_view_harness_with_repo(view, storage, sessions)
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    storage: Storage,
    sessions: Arc<dyn StudySessionRepository>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let app = Arc::new(TestApp {
        study_sessions: Arc::new(StudySessionService::new(clock, sessions)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
