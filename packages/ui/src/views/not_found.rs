use dioxus::prelude::*;

/// Shown for any path the router does not know.
#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "view-page view-empty",
            h2 { class: "view-title", "Página no encontrada" }
            p { class: "view-muted", "No existe ninguna página en /{path}." }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_home.call(()),
                "Volver al inicio"
            }
        }
    }
}
