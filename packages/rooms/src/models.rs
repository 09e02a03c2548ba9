//! # Domain models for the room inventory
//!
//! These are the records exchanged with the REST backend and held in view
//! state. They are `Serialize + Deserialize` and use the backend's camelCase
//! field names on the wire.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Room`] | A room as the backend returns it: id, type, integer price, description, and an optional base64 JPEG photo. |
//! | [`RoomId`] | Numeric room identifier. Implements `Display`/`FromStr` so it can be used as a route parameter. |
//! | [`RoomDraft`] | The editable form behind AddRoom/EditRoom. Built with [`RoomDraft::empty`] or [`RoomDraft::from_room`]. |
//! | [`PriceInput`] | Integer coercion of the raw price text field. |
//! | [`PhotoUpload`] | A photo picked from disk, ready to be sent as a multipart part. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Identifier assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for RoomId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A room as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    #[serde(default)]
    pub room_type: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub room_price: u64,
    #[serde(default)]
    pub room_description: String,
    /// Base64-encoded JPEG, as the backend serialises the stored blob.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, rename = "isBooked", alias = "booked")]
    pub booked: bool,
}

impl Room {
    /// `data:` URI for the stored photo, or `None` when the room has no photo.
    pub fn photo_data_uri(&self) -> Option<String> {
        self.photo
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("data:image/jpeg;base64,{p}"))
    }
}

/// The backend stores prices as decimals; the UI works in whole units.
fn deserialize_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!("invalid room price: {value}")));
    }
    Ok(value.trunc() as u64)
}

/// Raw price field with integer coercion.
///
/// Text that does not read as a non-negative number is rejected back to empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceInput(Option<u64>);

impl PriceInput {
    pub fn empty() -> Self {
        Self(None)
    }

    /// Read the leading digits of `raw`, ignoring whatever follows them.
    /// `"12.9"` reads as 12 and `"1e3"` as 1. Nothing to read, a minus sign,
    /// or overflow leaves the price empty.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start();
        let raw = raw.strip_prefix('+').unwrap_or(raw);
        let end = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        Self(raw[..end].parse().ok())
    }

    pub fn value(&self) -> Option<u64> {
        self.0
    }

    /// Text to put back into the input element.
    pub fn display(&self) -> String {
        self.0.map(|v| v.to_string()).unwrap_or_default()
    }
}

impl From<u64> for PriceInput {
    fn from(v: u64) -> Self {
        Self(Some(v))
    }
}

/// A photo chosen in the browser.
#[derive(Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PhotoUpload {
    /// Guess the MIME type from the file extension when the browser gives none.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| mime_from_name(&file_name).to_string());
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

fn mime_from_name(name: &str) -> &'static str {
    match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Selecciona un tipo de habitación")]
    MissingRoomType,
    #[error("Introduce un precio válido")]
    MissingPrice,
}

/// Form state behind the add and edit screens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomDraft {
    pub room_type: String,
    pub price: PriceInput,
    pub room_description: String,
    /// A newly picked photo. `None` keeps whatever the backend already has.
    pub photo: Option<PhotoUpload>,
}

impl RoomDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_room(room: &Room) -> Self {
        Self {
            room_type: room.room_type.clone(),
            price: PriceInput::from(room.room_price),
            room_description: room.room_description.clone(),
            photo: None,
        }
    }

    /// Check the fields the backend cannot do without.
    pub fn validate(&self) -> Result<u64, DraftError> {
        if self.room_type.trim().is_empty() {
            return Err(DraftError::MissingRoomType);
        }
        self.price.value().ok_or(DraftError::MissingPrice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_from_backend_json() {
        let json = r#"{"id":7,"roomType":"Suite","roomPrice":150.00,"roomDescription":"Vista al mar","photo":"AAEC","booked":false}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, RoomId(7));
        assert_eq!(room.room_type, "Suite");
        assert_eq!(room.room_price, 150);
        assert_eq!(room.photo_data_uri().as_deref(), Some("data:image/jpeg;base64,AAEC"));
    }

    #[test]
    fn test_room_missing_optional_fields() {
        let room: Room = serde_json::from_str(r#"{"id":1,"roomType":"Single","roomPrice":80}"#).unwrap();
        assert_eq!(room.room_description, "");
        assert!(room.photo_data_uri().is_none());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let res: Result<Room, _> = serde_json::from_str(r#"{"id":1,"roomPrice":-3}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_price_input_coercion() {
        assert_eq!(PriceInput::parse("120").value(), Some(120));
        assert_eq!(PriceInput::parse(" 99 ").value(), Some(99));
        assert_eq!(PriceInput::parse("12.9").value(), Some(12));
        assert_eq!(PriceInput::parse("abc").value(), None);
        assert_eq!(PriceInput::parse("").value(), None);
        assert_eq!(PriceInput::parse("-5").value(), None);
        assert_eq!(PriceInput::parse("1e3").value(), Some(1));
        assert_eq!(PriceInput::parse("+75").value(), Some(75));
        assert_eq!(PriceInput::parse("80 euros").value(), Some(80));
        assert_eq!(PriceInput::parse("99999999999999999999999").value(), None);
        assert_eq!(PriceInput::parse("abc").display(), "");
    }

    #[test]
    fn test_room_id_route_param() {
        assert_eq!("42".parse::<RoomId>().unwrap(), RoomId(42));
        assert!("x".parse::<RoomId>().is_err());
        assert_eq!(RoomId(42).to_string(), "42");
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = RoomDraft::empty();
        assert_eq!(draft.validate(), Err(DraftError::MissingRoomType));
        draft.room_type = "Double".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingPrice));
        draft.price = PriceInput::parse("90");
        assert_eq!(draft.validate(), Ok(90));
    }

    #[test]
    fn test_draft_from_room_keeps_photo_on_server() {
        let room = Room {
            id: RoomId(3),
            room_type: "Single".into(),
            room_price: 70,
            room_description: "Interior".into(),
            photo: Some("AAEC".into()),
            booked: false,
        };
        let draft = RoomDraft::from_room(&room);
        assert_eq!(draft.price.value(), Some(70));
        assert!(draft.photo.is_none());
    }

    #[test]
    fn test_photo_upload_mime_guess() {
        let photo = PhotoUpload::new("room.PNG", None, vec![1, 2, 3]);
        assert_eq!(photo.content_type, "image/png");
        let photo = PhotoUpload::new("room", Some(String::new()), vec![]);
        assert_eq!(photo.content_type, "image/jpeg");
    }
}
