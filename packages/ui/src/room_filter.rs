use dioxus::prelude::*;
use rooms::{distinct_types, Room};

/// Type filter for the rooms table. Options come from the loaded rooms.
#[component]
pub fn RoomFilter(rooms: Vec<Room>, selected: String, on_select: EventHandler<String>) -> Element {
    let types = distinct_types(&rooms);

    rsx! {
        div {
            class: "room-filter",
            span { class: "room-filter__label", "Filtrar habitaciones por tipo" }
            select {
                class: "form-select",
                value: "{selected}",
                onchange: move |evt| on_select.call(evt.value()),
                option { value: "", "Selecciona un tipo de habitación para filtrar..." }
                for room_type in types {
                    option {
                        key: "{room_type}",
                        value: "{room_type}",
                        "{room_type}"
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn btn-hotel",
                onclick: move |_| on_select.call(String::new()),
                "Limpiar filtro"
            }
        }
    }
}
