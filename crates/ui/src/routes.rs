use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use trail_core::Destination;

use crate::views::{LandingView, NotFoundView, ResourceView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/trail/:id", ResourceView)] ResourcePage { id: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Route::Landing {},
            Destination::Resource(id) => Route::ResourcePage { id: id.to_string() },
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "© 2025 Guardiões da Floresta - Preservando nosso futuro" }
            }
        }
    }
}
