use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::about::About;
use crate::views::progress_panel::ProgressPanel;
use crate::vm::{CallToActionVm, CtaKind, TrailRowVm, map_landing};

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let trail = ctx.trail();
    let mut progress = use_signal({
        let trail = Arc::clone(&trail);
        move || trail.snapshot()
    });

    let vm = map_landing(trail.trail(), &progress.read());

    let reset_trail = Arc::clone(&trail);
    let on_reset = move |()| {
        let trail = Arc::clone(&reset_trail);
        spawn(async move {
            trail.reset().await;
            progress.set(trail.snapshot());
        });
    };

    rsx! {
        div { class: "page landing",
            header { class: "landing-header",
                h1 { "🌲 Guardiões da Floresta" }
            }

            section { class: "hero",
                div { class: "hero-icon", "🌳" }
                h2 { "Bem-vindo ao Projeto Guardiões da Floresta" }
                div { class: "card intro",
                    p {
                        "Você já parou para pensar em como as florestas são importantes para a nossa vida? "
                        "A Mata Atlântica, aqui no Brasil, e a Floresta de Cantanhez, na Guiné-Bissau, "
                        "são dois exemplos incríveis de ambientes ricos em vida, cultura e história."
                    }
                    p {
                        "Estudar essas florestas nos ajuda a entender como os seres vivos se relacionam entre si "
                        "e com o ambiente. O enfoque CTS (Ciência, Tecnologia e Sociedade) mostra que as decisões "
                        "que tomamos têm impacto direto na vida das pessoas e na saúde do meio ambiente."
                    }
                    p {
                        "Vamos descobrir juntos curiosidades, desafios e soluções para conservar essas florestas tão importantes!"
                    }
                }
            }

            section { class: "section",
                ProgressPanel { panel: vm.progress.clone(), on_reset }
            }

            section { class: "section",
                CallToAction { cta: vm.cta.clone() }
            }

            section { class: "section trail-preview",
                h2 { "Conteúdos da Trilha" }
                p { class: "muted", "Siga a sequência para completar seu aprendizado" }
                ul { class: "trail-rows",
                    for row in vm.rows.clone() {
                        TrailRow { key: "{row.id}", row }
                    }
                }
            }

            section { class: "section",
                About {}
            }
        }
    }
}

#[component]
fn CallToAction(cta: CallToActionVm) -> Element {
    let navigator = use_navigator();
    let target = cta.target;
    let class = if cta.kind == CtaKind::Review {
        "cta-button"
    } else {
        "cta-button cta-large"
    };

    rsx! {
        div { class: "card cta",
            h2 { "{cta.heading}" }
            p { "{cta.body}" }
            button {
                class: "{class}",
                onclick: move |_| {
                    let _ = navigator.push(Route::ResourcePage { id: target.to_string() });
                },
                "▶ {cta.button_label}"
            }
        }
    }
}

#[component]
fn TrailRow(row: TrailRowVm) -> Element {
    let locked = row.is_locked();
    let class = if locked { "trail-row locked" } else { "trail-row" };

    rsx! {
        li { class: "{class}",
            div { class: "row-icon", "{row.icon}" }
            div { class: "row-body",
                div { class: "row-title",
                    if locked {
                        h3 { "{row.title}" }
                    } else {
                        Link { to: Route::ResourcePage { id: row.id.to_string() },
                            h3 { "{row.title}" }
                        }
                    }
                    if let Some(label) = row.badge.label() {
                        span { class: "{row.badge.class()}", "{label}" }
                    }
                }
                p { "{row.description}" }
            }
            div { class: "row-number {row.accent}", "{row.position}" }
        }
    }
}
