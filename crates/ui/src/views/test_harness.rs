use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, TrailService};
use storage::repository::Storage;
use trail_core::model::Trail;

use crate::context::{UiApp, build_app_context};
use crate::views::{LandingView, NotFoundView, ResourceView};

#[derive(Clone)]
struct TestApp {
    trail: Arc<TrailService>,
}

impl UiApp for TestApp {
    fn trail(&self) -> Arc<TrailService> {
        Arc::clone(&self.trail)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Resource(String),
    NotFound,
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

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
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
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Resource(id) => rsx! { ResourceView { id } },
        ViewKind::NotFound => rsx! {
            NotFoundView { segments: vec!["missing".to_string()] }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub trail: Arc<TrailService>,
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

/// Services over fresh in-memory storage. Seed progress through the returned trail
/// service before building the view.
pub async fn setup_trail() -> Arc<TrailService> {
    AppServices::from_storage(Storage::in_memory())
        .await
        .expect("shipped trail is valid")
        .trail()
}

/// Services over fresh in-memory storage for a custom trail.
pub async fn setup_custom_trail(trail: Trail) -> Arc<TrailService> {
    AppServices::with_trail(Storage::in_memory(), trail).await.trail()
}

pub fn mount_view(view: ViewKind, trail: Arc<TrailService>) -> ViewHarness {
    let app = Arc::new(TestApp {
        trail: Arc::clone(&trail),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, trail }
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let trail = setup_trail().await;
    mount_view(view, trail)
}
