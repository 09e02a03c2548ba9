use api::RoomApi;
use dioxus::prelude::*;

use crate::client;

const ADD_NEW: &str = "__add_new__";

/// Room type dropdown fed by the backend's type catalogue.
///
/// With `allow_new`, an extra entry reveals a text field so a type that does
/// not exist yet can be added to the list and selected.
#[component]
pub fn RoomTypeSelector(
    id: String,
    value: String,
    onchange: EventHandler<String>,
    #[props(default = true)] allow_new: bool,
    #[props(default = "Selecciona un tipo de habitación".to_string())] placeholder: String,
) -> Element {
    let mut room_types = use_signal(Vec::<String>::new);
    let mut show_new_input = use_signal(|| false);
    let mut new_type = use_signal(String::new);

    let _loader = use_resource(move || {
        let api = client();
        async move {
            match api.room_types().await {
                Ok(types) => room_types.set(types),
                Err(e) => tracing::warn!("Could not load room types: {e}"),
            }
        }
    });

    let handle_select = move |evt: FormEvent| {
        let selected = evt.value();
        if selected == ADD_NEW {
            show_new_input.set(true);
        } else {
            show_new_input.set(false);
            onchange.call(selected);
        }
    };

    let handle_add_type = move |_| {
        let name = new_type().trim().to_string();
        if name.is_empty() {
            return;
        }
        if !room_types.read().contains(&name) {
            room_types.write().push(name.clone());
        }
        new_type.set(String::new());
        show_new_input.set(false);
        onchange.call(name);
    };

    // A value loaded from a room may predate the catalogue.
    let mut options = room_types();
    if !value.is_empty() && !options.contains(&value) {
        options.push(value.clone());
    }

    rsx! {
        div {
            class: "room-type-selector",
            select {
                id: "{id}",
                name: "roomType",
                class: "form-control",
                value: "{value}",
                onchange: handle_select,
                option { value: "", "{placeholder}" }
                if allow_new {
                    option { value: ADD_NEW, "Agregar nuevo" }
                }
                for room_type in options {
                    option {
                        key: "{room_type}",
                        value: "{room_type}",
                        "{room_type}"
                    }
                }
            }
            if show_new_input() {
                div {
                    class: "room-type-selector__new",
                    input {
                        r#type: "text",
                        class: "form-control",
                        placeholder: "Introduce un nuevo tipo de habitación",
                        value: new_type(),
                        oninput: move |evt| new_type.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline-primary",
                        onclick: handle_add_type,
                        "Agregar"
                    }
                }
            }
        }
    }
}
