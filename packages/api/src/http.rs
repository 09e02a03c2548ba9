//! reqwest-backed [`RoomApi`] talking to the hotel REST backend.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use rooms::{Room, RoomDraft, RoomId, ValidSearch};

use crate::error::{ApiError, ErrorBody};
use crate::RoomApi;

#[derive(Debug, Clone)]
pub struct HttpRoomApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoomApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Multipart body shared by create and update.
fn room_form(draft: &RoomDraft, price: u64) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("roomType", draft.room_type.trim().to_string())
        .text("roomPrice", price.to_string())
        .text("roomDescription", draft.room_description.clone());
    if let Some(photo) = &draft.photo {
        let part = Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone())
            .mime_str(&photo.content_type)?;
        form = form.part("photo", part);
    }
    Ok(form)
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the server's message.
async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Error del servidor")
                .to_string()
        });
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl RoomApi for HttpRoomApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        let resp = self.client.get(self.url("/rooms/all-rooms")).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn room_types(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.client.get(self.url("/rooms/room/types")).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, ApiError> {
        let resp = self
            .client
            .get(self.url(&format!("/rooms/room/{id}")))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        Ok(check(resp).await?.json().await?)
    }

    async fn create_room(&self, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
        let resp = self
            .client
            .post(self.url("/rooms/add/new-room"))
            .multipart(room_form(draft, price)?)
            .send()
            .await?;
        let room: Room = check(resp).await?.json().await?;
        tracing::info!("Created room {} ({})", room.id, room.room_type);
        Ok(room)
    }

    async fn update_room(&self, id: RoomId, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
        let resp = self
            .client
            .put(self.url(&format!("/rooms/update/{id}")))
            .multipart(room_form(draft, price)?)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(&format!("/rooms/delete/room/{id}")))
            .send()
            .await?;
        check(resp).await?;
        tracing::info!("Deleted room {id}");
        Ok(())
    }

    async fn available_rooms(&self, search: &ValidSearch) -> Result<Vec<Room>, ApiError> {
        let resp = self
            .client
            .get(self.url("/rooms/available-rooms"))
            .query(&[
                ("checkInDate", search.check_in_param()),
                ("checkOutDate", search.check_out_param()),
                ("roomType", search.room_type.clone()),
            ])
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn export_rooms(&self) -> Result<Vec<u8>, ApiError> {
        let resp = self.client.get(self.url("/rooms/export/excel")).send().await?;
        let bytes = check(resp).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rooms::{PhotoUpload, PriceInput};

    #[test]
    fn test_base_url_is_normalised() {
        let api = HttpRoomApi::new("http://localhost:9192/");
        assert_eq!(api.base_url(), "http://localhost:9192");
        assert_eq!(api.url("/rooms/all-rooms"), "http://localhost:9192/rooms/all-rooms");
    }

    #[test]
    fn test_room_form_with_and_without_photo() {
        let mut draft = RoomDraft {
            room_type: "Suite".into(),
            price: PriceInput::parse("150"),
            room_description: "Vista al mar".into(),
            photo: None,
        };
        assert!(room_form(&draft, 150).is_ok());

        draft.photo = Some(PhotoUpload::new("suite.jpg", None, vec![0xff, 0xd8]));
        assert!(room_form(&draft, 150).is_ok());

        draft.photo = Some(PhotoUpload::new("bad", Some("not a mime".into()), vec![]));
        assert!(room_form(&draft, 150).is_err());
    }
}
