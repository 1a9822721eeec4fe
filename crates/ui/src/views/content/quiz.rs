use dioxus::prelude::*;

#[component]
pub fn QuizContent(embed_url: String) -> Element {
    rsx! {
        div { class: "card quiz",
            h3 { "Teste Seus Conhecimentos" }
            iframe {
                src: "{embed_url}",
                title: "Quiz dos Guardiões",
                allowfullscreen: true,
            }
        }
    }
}
