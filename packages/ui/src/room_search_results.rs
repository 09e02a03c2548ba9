use dioxus::prelude::*;
use rooms::Room;

use crate::RoomPaginator;

/// One page of the rooms a search found. Paging state lives with the search.
#[component]
pub fn RoomSearchResults(
    results: Vec<Room>,
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
    on_clear_search: EventHandler<()>,
) -> Element {
    if results.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "search-results",
            h5 { class: "search-results__title", "Resultados de la búsqueda" }
            div {
                class: "search-results__grid",
                for room in results {
                    RoomCard { key: "{room.id}", room: room.clone() }
                }
            }
            RoomPaginator {
                current_page,
                total_pages,
                on_page_change: move |n| on_page_change.call(n),
            }
            button {
                r#type: "button",
                class: "btn btn-secondary",
                onclick: move |_| on_clear_search.call(()),
                "Limpiar búsqueda"
            }
        }
    }
}

#[component]
pub fn RoomCard(room: Room) -> Element {
    rsx! {
        div {
            class: "room-card",
            if let Some(src) = room.photo_data_uri() {
                img {
                    class: "room-card__photo",
                    src: "{src}",
                    alt: "Foto de la habitación",
                }
            }
            div {
                class: "room-card__body",
                h4 { class: "room-card__type", "{room.room_type}" }
                p { class: "room-card__price", "{room.room_price} / noche" }
                p { class: "room-card__description", "{room.room_description}" }
            }
        }
    }
}
