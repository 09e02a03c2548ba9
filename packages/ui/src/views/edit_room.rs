use api::{update_room_and_reload, RoomApi, SubmitFailure};
use dioxus::prelude::*;
use rooms::{PriceInput, RoomDraft, RoomId};

use super::add_room::read_photo;
use crate::platform;
use crate::{client, use_banner, BannerView};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared edit form for an existing room.
#[component]
pub fn EditRoomView(
    room_id: RoomId,
    /// Called by the "back" button.
    on_back: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| room_id);
    if *id_signal.peek() != room_id {
        id_signal.set(room_id);
    }

    let mut draft = use_signal(RoomDraft::empty);
    // Photo as stored on the server, shown until a new one is picked.
    let mut stored_photo = use_signal(|| Option::<String>::None);
    let mut new_preview = use_signal(|| Option::<String>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut banner = use_banner();

    let _loader = use_resource(move || {
        let id = id_signal();
        let api = client();
        async move {
            match api.get_room(id).await {
                Ok(room) => {
                    draft.set(RoomDraft::from_room(&room));
                    stored_photo.set(room.photo_data_uri());
                    load_error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load room {id}: {e}");
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let mut replace_preview = move |url: Option<String>| {
        if let Some(old) = new_preview.write().take() {
            platform::revoke_object_url(&old);
        }
        new_preview.set(url);
    };

    let handle_photo = move |evt: FormEvent| async move {
        if let Some(photo) = read_photo(&evt).await {
            replace_preview(platform::object_url(&photo.bytes, &photo.content_type));
            draft.write().photo = Some(photo);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = client();
        let id = id_signal();
        let current = draft();
        spawn(async move {
            match update_room_and_reload(&api, id, &current).await {
                Ok(room) => {
                    load_error.set(None);
                    banner.success("Habitación actualizada exitosamente!!");
                    draft.set(RoomDraft::from_room(&room));
                    stored_photo.set(room.photo_data_uri());
                    replace_preview(None);
                }
                Err(SubmitFailure::Reload(e)) => {
                    // Saved; only the refreshed copy is missing.
                    banner.success("Habitación actualizada exitosamente!!");
                    load_error.set(Some(SubmitFailure::Reload(e).to_string()));
                }
                Err(SubmitFailure::Api(e)) if e.is_status() => {
                    tracing::error!("Update of room {id} rejected: {e}");
                    banner.error("Error actualizando habitación");
                }
                Err(e) => {
                    tracing::error!("Update of room {id} failed: {e}");
                    banner.error(e.to_string());
                }
            }
        });
    };

    let d = draft();
    let price_text = d.price.display();
    let preview = new_preview().or_else(|| stored_photo());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view-page view-form",
            h3 { class: "view-title", "Editar Habitación" }
            BannerView { banner: banner.current() }
            if let Some(message) = load_error() {
                p { class: "banner banner--error", "{message}" }
            }

            form {
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { r#for: "roomType", "Tipo de habitación" }
                    input {
                        id: "roomType",
                        name: "roomType",
                        r#type: "text",
                        class: "form-control",
                        value: "{d.room_type}",
                        oninput: move |evt: FormEvent| draft.write().room_type = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "roomPrice", "Precio de la habitación" }
                    input {
                        id: "roomPrice",
                        name: "roomPrice",
                        r#type: "number",
                        min: "0",
                        class: "form-control",
                        value: "{price_text}",
                        oninput: move |evt: FormEvent| draft.write().price = PriceInput::parse(&evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "roomDescription", "Descripción" }
                    textarea {
                        id: "roomDescription",
                        name: "roomDescription",
                        required: true,
                        rows: "3",
                        class: "form-control",
                        value: "{d.room_description}",
                        oninput: move |evt: FormEvent| draft.write().room_description = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "photo", "Foto" }
                    input {
                        id: "photo",
                        name: "photo",
                        r#type: "file",
                        accept: "image/*",
                        class: "form-control",
                        onchange: handle_photo,
                    }
                    if let Some(src) = preview {
                        img {
                            class: "photo-preview",
                            src: "{src}",
                            alt: "Vista previa de la habitación",
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline-info",
                        onclick: move |_| on_back.call(()),
                        "Atrás"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-outline-warning",
                        "Editar Habitación"
                    }
                }
            }
        }
    }
}
