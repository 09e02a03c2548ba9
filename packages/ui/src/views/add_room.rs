use api::create_room;
use dioxus::prelude::*;
use rooms::{PhotoUpload, PriceInput, RoomDraft};

use crate::platform;
use crate::{client, use_banner, BannerView, RoomTypeSelector};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read the first picked file into a [`PhotoUpload`].
pub(crate) async fn read_photo(evt: &FormEvent) -> Option<PhotoUpload> {
    let file = evt.files().into_iter().next()?;
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => Some(PhotoUpload::new(name, file.content_type(), bytes.to_vec())),
        Err(e) => {
            tracing::error!("Could not read {name}: {e}");
            None
        }
    }
}

/// Form to create a room.
#[component]
pub fn AddRoomView(on_existing_rooms: EventHandler<()>) -> Element {
    let mut draft = use_signal(RoomDraft::empty);
    let mut image_preview = use_signal(|| Option::<String>::None);
    let mut banner = use_banner();

    let mut replace_preview = move |url: Option<String>| {
        if let Some(old) = image_preview.write().take() {
            platform::revoke_object_url(&old);
        }
        image_preview.set(url);
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
        let current = draft();
        spawn(async move {
            match create_room(&api, &current).await {
                Ok(room) => {
                    tracing::info!("Room {} added", room.id);
                    banner.success("¡Se agregó una habitación con éxito!");
                    draft.set(RoomDraft::empty());
                    replace_preview(None);
                }
                Err(e) => {
                    tracing::error!("Failed to add room: {e}");
                    banner.error(e.to_string());
                }
            }
        });
    };

    let d = draft();
    let price_text = d.price.display();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view-page view-form",
            h2 { class: "view-title", "Agregar una nueva habitación" }
            BannerView { banner: banner.current() }

            form {
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { r#for: "roomType", "Tipo de habitación" }
                    RoomTypeSelector {
                        id: "roomType",
                        value: d.room_type.clone(),
                        onchange: move |room_type| draft.write().room_type = room_type,
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
                        required: true,
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
                    label { r#for: "photo", "Foto de la habitación" }
                    input {
                        id: "photo",
                        name: "photo",
                        r#type: "file",
                        accept: "image/*",
                        class: "form-control",
                        onchange: handle_photo,
                    }
                    if let Some(src) = image_preview() {
                        img {
                            class: "photo-preview",
                            src: "{src}",
                            alt: "Vista previa de la foto de la habitación",
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline-info",
                        onclick: move |_| on_existing_rooms.call(()),
                        "Habitaciones existentes"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-outline-primary",
                        "Guardar habitación"
                    }
                }
            }
        }
    }
}
