use dioxus::prelude::*;

const TEAM: &[(&str, &str, &str)] = &[("Elquias Junior", "Frontend Developer", "👨‍💻")];

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "card about",
            div { class: "about-header",
                div { class: "icon-circle", "💚" }
                h2 { "Quem Criou Este Projeto" }
                p {
                    "Somos um grupo dedicado à educação ambiental e à preservação das florestas. "
                    "Criamos este projeto para inspirar a próxima geração de guardiões da natureza."
                }
            }
            div { class: "team",
                for (name, role, avatar) in TEAM.iter().copied() {
                    div { class: "team-member",
                        div { class: "avatar", "{avatar}" }
                        h3 { "{name}" }
                        p { class: "role", "{role}" }
                    }
                }
            }
        }
    }
}
