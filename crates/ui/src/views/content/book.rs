use dioxus::prelude::*;
use trail_core::model::GalleryPage;

use crate::vm::PageCursor;

/// Flip-book over the gallery pages.
///
/// `on_consumed` fires once, the first time the last page is shown.
#[component]
pub fn Book(pages: Vec<GalleryPage>, on_consumed: EventHandler<()>) -> Element {
    let total = pages.len();
    let mut cursor = use_signal(|| PageCursor::new(total));
    let mut reported = use_signal(|| false);

    use_effect(move || {
        if cursor.read().at_end() && !*reported.peek() {
            reported.set(true);
            on_consumed.call(());
        }
    });

    let current = *cursor.read();
    let Some(page) = pages.get(current.current()).cloned() else {
        return rsx! {
            div { class: "book empty", p { "Nenhuma página disponível." } }
        };
    };
    let counter = current.counter_label();

    rsx! {
        div { class: "book",
            figure { class: "book-page",
                img { src: "{page.image_url}", alt: "{page.caption}" }
                figcaption { "{page.caption}" }
            }

            div { class: "book-controls",
                button {
                    class: "book-previous",
                    disabled: current.at_start(),
                    onclick: move |_| cursor.write().previous(),
                    "Anterior"
                }
                span { class: "book-counter", "{counter}" }
                button {
                    class: "book-next",
                    disabled: current.at_end(),
                    onclick: move |_| cursor.write().next(),
                    "Próxima"
                }
            }

            div { class: "book-dots",
                for index in 0..total {
                    button {
                        key: "{index}",
                        class: if index == current.current() { "dot active" } else { "dot" },
                        title: "Página {index + 1}",
                        onclick: move |_| cursor.write().go_to(index),
                    }
                }
            }
        }
    }
}
