use dioxus::prelude::*;

#[component]
pub fn RoomPaginator(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            "aria-label": "Paginación",
            ul {
                class: "pagination",
                for page in 1..=total_pages {
                    li {
                        key: "{page}",
                        class: if page == current_page { "page-item active" } else { "page-item" },
                        button {
                            r#type: "button",
                            class: "page-link",
                            onclick: move |_| on_page_change.call(page),
                            "{page}"
                        }
                    }
                }
            }
        }
    }
}
