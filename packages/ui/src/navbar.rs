use dioxus::prelude::*;

use crate::ROOMS_CSS;

/// Top bar. Platform packages pass their router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ROOMS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar__brand", "Hotel · Administración" }
            div {
                class: "navbar__links",
                {children}
            }
        }
    }
}
