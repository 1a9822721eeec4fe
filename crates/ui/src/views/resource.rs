use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use trail_core::model::{ResourceContent, ResourceVisit};
use trail_core::{NextStep, VisitOutcome};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::content::{Book, MediaContent, QuizContent};
use crate::views::not_found::NotFoundPanel;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_resource_page;

#[component]
pub fn ResourceView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let trail = ctx.trail();

    let resource = use_resource(use_reactive!(|(id,)| {
        let trail = Arc::clone(&trail);
        async move { Ok::<_, ViewError>(trail.visit(&id).await) }
    }));

    let state = view_state_from_resource(&resource);

    rsx! {
        match state {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "page", p { "Carregando..." } }
            },
            ViewState::Ready(VisitOutcome::NotFound) => rsx! {
                NotFoundPanel {}
            },
            ViewState::Ready(VisitOutcome::Locked(_)) => rsx! {
                LockedPanel {}
            },
            ViewState::Ready(VisitOutcome::Opened(visit)) => rsx! {
                OpenedResource { key: "{visit.id()}", visit: visit.clone() }
            },
            ViewState::Error(err) => rsx! {
                div { class: "page", p { "{err.message()}" } }
            },
        }
    }
}

/// Shown for resources beyond the frontier. No content is rendered.
#[component]
fn LockedPanel() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page locked-resource",
            div { class: "lock-icon", "🔒" }
            h2 { "Etapa bloqueada" }
            p { "Conclua as etapas anteriores para desbloquear este conteúdo." }
            button {
                class: "link-button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Landing {});
                },
                "Voltar para a página inicial"
            }
        }
    }
}

#[component]
fn OpenedResource(visit: ResourceVisit) -> Element {
    let ctx = use_context::<AppContext>();
    let trail = ctx.trail();
    let navigator = use_navigator();
    let mut current_visit = use_signal(|| visit.clone());

    let Some(resource) = trail.resource(visit.id()).cloned() else {
        return rsx! { NotFoundPanel {} };
    };
    let page = map_resource_page(trail.trail(), &resource);
    let can_proceed = current_visit.read().can_proceed();

    // The report is queued during the handler and applied once the handler has returned.
    let on_consumed = move |()| {
        current_visit.write().report_consumed();
        spawn(async move {
            current_visit.write().settle();
        });
    };

    let next_trail = Arc::clone(&trail);
    let on_next = move |_| {
        let trail = Arc::clone(&next_trail);
        spawn(async move {
            let mut visit = current_visit.read().clone();
            match trail.go_next(&mut visit).await {
                Ok(NextStep::Moved(destination)) => {
                    current_visit.set(visit);
                    let _ = navigator.push(Route::from(destination));
                }
                Ok(NextStep::Blocked) => {}
                Err(err) => tracing::warn!(error = %err, "could not move forward"),
            }
        });
    };

    let previous_trail = Arc::clone(&trail);
    let on_previous = move |_| {
        if let Some(destination) = previous_trail.go_previous(&current_visit.read()) {
            let _ = navigator.push(Route::from(destination));
        }
    };

    let next_class = if can_proceed {
        format!("nav-next {}", page.accent)
    } else {
        "nav-next gated".to_string()
    };

    rsx! {
        div { class: "page resource",
            header { class: "resource-header",
                button {
                    class: "home-button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Landing {});
                    },
                    "⌂ Página Inicial"
                }
                span { class: "step-label", "{page.step_label}" }
            }

            div { class: "resource-hero {page.accent}",
                div { class: "hero-icon", "{page.icon}" }
                h1 { "{page.title}" }
                p { "{page.full_description}" }
            }

            div { class: "resource-content",
                match resource.content().clone() {
                    ResourceContent::Gallery { pages } => rsx! {
                        Book { pages, on_consumed }
                    },
                    ResourceContent::Media { video_url, audio } => rsx! {
                        MediaContent { video_url, audio }
                    },
                    ResourceContent::Quiz { embed_url } => rsx! {
                        QuizContent { embed_url }
                    },
                }
            }

            nav { class: "card resource-nav",
                button {
                    class: "nav-previous",
                    disabled: page.is_first,
                    onclick: on_previous,
                    "← Etapa Anterior"
                }
                if !can_proceed {
                    p { class: "gate-hint", "Veja todas as páginas para continuar." }
                }
                button {
                    class: "{next_class}",
                    disabled: !can_proceed,
                    onclick: on_next,
                    "{page.next_label} →"
                }
            }
        }
    }
}
