use api::{delete_room_and_refresh, RoomApi};
use dioxus::prelude::*;
use rooms::{filter_by_type, Pagination, Room, RoomId};

use crate::icons::{FaFileExcel, FaPenToSquare, FaPlus, FaTrashCan};
use crate::platform::{self, XLSX_MIME};
use crate::{client, use_banner, use_config, BannerView, Icon, RoomFilter, RoomPaginator};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared rooms table: type filter, pagination, delete and export.
///
/// Platform packages provide the navigation callbacks.
#[component]
pub fn ExistingRoomsView(
    /// Called by the "add room" link.
    on_add_room: EventHandler<()>,
    /// Called with the id of the room to edit.
    on_edit_room: EventHandler<RoomId>,
) -> Element {
    let config = use_config();
    let mut rooms = use_signal(Vec::<Room>::new);
    let mut selected_type = use_signal(String::new);
    let mut pagination = use_signal(|| Pagination::new(config.rooms.per_page));
    let mut is_loading = use_signal(|| true);
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut banner = use_banner();

    let _loader = use_resource(move || {
        let api = client();
        async move {
            is_loading.set(true);
            match api.list_rooms().await {
                Ok(list) => {
                    rooms.set(list);
                    error_message.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load rooms: {e}");
                    error_message.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        }
    });

    let filtered = use_memo(move || filter_by_type(&rooms.read(), &selected_type.read()));

    // Back to the first page whenever the list or the filter changes.
    use_effect(move || {
        let _ = rooms.read();
        let _ = selected_type.read();
        pagination.write().reset();
    });

    let handle_delete = move |id: RoomId| {
        let api = client();
        spawn(async move {
            match delete_room_and_refresh(&api, id).await {
                Ok(list) => {
                    rooms.set(list);
                    banner.success(format!("Habitación No {id} fue eliminado"));
                }
                Err(e) => {
                    tracing::error!("Failed to delete room {id}: {e}");
                    banner.error(e.to_string());
                }
            }
        });
    };

    let handle_export = move |_| {
        let api = client();
        spawn(async move {
            match api.export_rooms().await {
                Ok(bytes) => {
                    if !platform::download(&bytes, "habitaciones.xlsx", XLSX_MIME) {
                        tracing::warn!("Export of {} bytes was not offered as a download", bytes.len());
                    }
                    platform::alert("Habitaciones exportadas a Excel exitosamente!");
                }
                Err(e) => {
                    tracing::error!("Export failed: {e}");
                    platform::alert("Error al exportar habitaciones a Excel.");
                }
            }
        });
    };

    let filtered_rooms = filtered();
    let page = pagination();
    let total_pages = page.total_pages(filtered_rooms.len());
    let current_rooms = page.page(&filtered_rooms).to_vec();
    let filtered_len = filtered_rooms.len();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "view-banners",
            BannerView { banner: banner.current() }
            if let Some(message) = error_message() {
                p { class: "banner banner--error", "{message}" }
            }
        }

        if is_loading() {
            p { class: "view-muted", "Cargando habitaciones existentes" }
        } else {
            section {
                class: "view-page",
                div {
                    class: "view-header",
                    h2 { class: "view-title", "Habitaciones existentes" }
                    button {
                        class: "btn btn-success",
                        onclick: handle_export,
                        Icon { icon: FaFileExcel, width: 14, height: 14 }
                        " Exportar a Excel"
                    }
                }

                div {
                    class: "view-toolbar",
                    RoomFilter {
                        rooms: rooms(),
                        selected: selected_type(),
                        on_select: move |room_type| selected_type.set(room_type),
                    }
                    button {
                        class: "btn btn-link",
                        onclick: move |_| on_add_room.call(()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " Agregar habitación"
                    }
                }

                table {
                    class: "table table-bordered table-hover",
                    thead {
                        tr {
                            class: "text-center",
                            th { "ID" }
                            th { "Tipo de Habitación" }
                            th { "Precio de Habitación" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        for room in current_rooms {
                            tr {
                                key: "{room.id}",
                                class: "text-center",
                                td { "{room.id}" }
                                td { "{room.room_type}" }
                                td { "{room.room_price}" }
                                td {
                                    class: "view-actions",
                                    button {
                                        class: "btn btn-warning btn-sm",
                                        title: "Editar",
                                        onclick: move |_| on_edit_room.call(room.id),
                                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        title: "Eliminar",
                                        onclick: move |_| handle_delete(room.id),
                                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }

                if filtered_len == 0 {
                    p { class: "view-muted", "No hay habitaciones para mostrar." }
                }

                RoomPaginator {
                    current_page: page.current_page,
                    total_pages: total_pages,
                    on_page_change: move |n| pagination.write().go_to(n, filtered_len),
                }
            }
        }
    }
}
