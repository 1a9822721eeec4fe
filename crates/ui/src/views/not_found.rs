use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

/// Route target for paths the router does not know.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route");
    rsx! { NotFoundPanel {} }
}

/// Terminal "not found" presentation. The only way out is back to the landing view.
#[component]
pub fn NotFoundPanel() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page not-found",
            h2 { "Recurso não encontrado" }
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
