use dioxus::prelude::*;

use crate::vm::ProgressPanelVm;

/// Completion summary, percentage bar and the reset control.
///
/// Reset asks for confirmation before `on_reset` fires.
#[component]
pub fn ProgressPanel(panel: ProgressPanelVm, on_reset: EventHandler<()>) -> Element {
    let mut confirming = use_signal(|| false);
    let summary = panel.summary();
    let percentage = panel.percentage;

    rsx! {
        div { class: "card progress-panel",
            div { class: "progress-header",
                div { class: "icon-circle", "🏆" }
                h2 { "Seu Progresso" }
                p { "{summary}" }

                if panel.show_reset {
                    if confirming() {
                        div { class: "reset-confirm",
                            p {
                                "Tem certeza que deseja resetar todo o seu progresso? "
                                "Esta ação não pode ser desfeita."
                            }
                            button {
                                class: "danger",
                                onclick: move |_| {
                                    confirming.set(false);
                                    on_reset.call(());
                                },
                                "Confirmar"
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| confirming.set(false),
                                "Cancelar"
                            }
                        }
                    } else {
                        button {
                            class: "reset",
                            title: "Resetar progresso",
                            onclick: move |_| confirming.set(true),
                            "↺ Resetar"
                        }
                    }
                }
            }

            div { class: "progress-body",
                div { class: "progress-caption",
                    span { "Progresso Total" }
                    span { class: "progress-value", "{percentage}%" }
                }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {percentage}%",
                        if panel.show_bar_label() {
                            span { "{percentage}%" }
                        }
                    }
                }

                if panel.celebrate {
                    div { class: "celebrate",
                        p {
                            "🎉 Parabéns! Você completou todos os materiais e é um verdadeiro Guardião da Floresta!"
                        }
                    }
                }
            }
        }
    }
}
