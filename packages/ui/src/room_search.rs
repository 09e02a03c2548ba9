use std::time::Duration;

use api::{search_available, SearchFailure};
use dioxus::prelude::*;
use rooms::search::today_param;
use rooms::{SearchQuery, SearchState};

use crate::{client, platform, use_config, RoomSearchResults, RoomTypeSelector};

/// Availability search by date range and room type.
#[component]
pub fn RoomSearch() -> Element {
    let config = use_config();
    let loading_delay = Duration::from_millis(config.search.loading_delay_ms);
    let per_page = config.rooms.per_page;

    let mut query = use_signal(SearchQuery::empty);
    let mut state = use_signal(|| SearchState::new(per_page));

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let current = query();
        let api = client();
        spawn(async move {
            state.write().begin();
            match search_available(&api, &current).await {
                Ok(rooms) => {
                    state.write().succeed(rooms);
                    platform::sleep(loading_delay).await;
                    state.write().finish();
                }
                Err(SearchFailure::Invalid(e)) => {
                    state.write().reject(e.to_string());
                }
                Err(e) => {
                    tracing::error!("Availability search failed: {e}");
                    state.write().fail(e.to_string());
                }
            }
        });
    };

    let mut after_edit = move || {
        let dates_parse = query.peek().dates_parse();
        state.write().edited(dates_parse);
    };

    let mut clear_search = move || {
        query.set(SearchQuery::empty());
        state.write().clear();
    };

    let today = today_param();
    let q = query();
    let view = state();

    rsx! {
        div {
            class: "room-search shadow",
            form {
                onsubmit: handle_search,
                div {
                    class: "room-search__row",
                    div {
                        class: "room-search__field",
                        label { r#for: "checkInDate", "Fecha de entrada" }
                        input {
                            id: "checkInDate",
                            r#type: "date",
                            name: "checkInDate",
                            class: "form-control",
                            min: "{today}",
                            value: "{q.check_in_date}",
                            oninput: move |evt: FormEvent| {
                                query.write().check_in_date = evt.value();
                                after_edit();
                            },
                        }
                    }
                    div {
                        class: "room-search__field",
                        label { r#for: "checkOutDate", "Fecha de salida" }
                        input {
                            id: "checkOutDate",
                            r#type: "date",
                            name: "checkOutDate",
                            class: "form-control",
                            min: "{today}",
                            value: "{q.check_out_date}",
                            oninput: move |evt: FormEvent| {
                                query.write().check_out_date = evt.value();
                                after_edit();
                            },
                        }
                    }
                    div {
                        class: "room-search__field",
                        label { r#for: "searchRoomType", "Tipo de habitación" }
                        div {
                            class: "room-search__type",
                            RoomTypeSelector {
                                id: "searchRoomType",
                                value: q.room_type.clone(),
                                allow_new: false,
                                placeholder: "Todos los tipos",
                                onchange: move |v: String| {
                                    query.write().room_type = v;
                                    after_edit();
                                },
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-secondary",
                                disabled: view.is_loading(),
                                "Buscar"
                            }
                        }
                    }
                }
            }

            if view.is_loading() {
                p { class: "room-search__status", "Buscando habitaciones disponibles...." }
            } else if view.shows_no_results() {
                p {
                    class: "room-search__status",
                    "No hay habitaciones disponibles para las fechas y el tipo de habitación seleccionados."
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| clear_search(),
                    "Limpiar búsqueda"
                }
            } else {
                RoomSearchResults {
                    results: view.visible().to_vec(),
                    current_page: view.current_page(),
                    total_pages: view.total_pages(),
                    on_page_change: move |n| state.write().go_to(n),
                    on_clear_search: move |_| clear_search(),
                }
            }

            if let Some(message) = view.error() {
                p { class: "text-danger", "{message}" }
            }
        }
    }
}
