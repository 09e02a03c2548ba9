use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Days, NaiveDate};
use rooms::{PhotoUpload, Room, RoomDraft, RoomId, ValidSearch};

use crate::error::ApiError;
use crate::RoomApi;

#[derive(Debug, Clone)]
struct Booking {
    room_id: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, Default)]
struct Inner {
    rooms: BTreeMap<RoomId, Room>,
    bookings: Vec<Booking>,
    next_id: u64,
    offline: bool,
}

/// In-memory backend for tests and running the UI without a server.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoomApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryRoomApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a room directly, bypassing validation. Returns its id.
    pub fn insert(&self, room_type: &str, room_price: u64, room_description: &str) -> RoomId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = RoomId(inner.next_id);
        inner.rooms.insert(
            id,
            Room {
                id,
                room_type: room_type.to_string(),
                room_price,
                room_description: room_description.to_string(),
                photo: None,
                booked: false,
            },
        );
        id
    }

    /// Record a stay so the room stops showing up as available for those dates.
    pub fn book(&self, room_id: RoomId, check_in: NaiveDate, check_out: NaiveDate) {
        let mut inner = self.lock();
        if let Some(room) = inner.rooms.get_mut(&room_id) {
            room.booked = true;
        }
        inner.bookings.push(Booking {
            room_id,
            check_in,
            check_out,
        });
    }

    /// Make every call fail with a transport error, as if the server were down.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Decoded bytes of the stored photo.
    pub fn photo_bytes(&self, id: RoomId) -> Option<Vec<u8>> {
        let inner = self.lock();
        let encoded = inner.rooms.get(&id)?.photo.as_ref()?;
        STANDARD.decode(encoded).ok()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn online(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ApiError> {
        let inner = self.lock();
        if inner.offline {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(inner)
    }
}

/// Photos travel back to the screens base64-encoded, as the real backend sends them.
fn encode_photo(photo: &PhotoUpload) -> String {
    STANDARD.encode(&photo.bytes)
}

/// End of a stay, exclusive. A same-day stay counts as one night.
fn stay_end(check_in: NaiveDate, check_out: NaiveDate) -> NaiveDate {
    if check_out > check_in {
        check_out
    } else {
        check_in.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
    }
}

impl Booking {
    /// Nights are half-open, so a stay may start on another's check-out day.
    fn overlaps(&self, search: &ValidSearch) -> bool {
        self.check_in < stay_end(search.check_in, search.check_out)
            && search.check_in < stay_end(self.check_in, self.check_out)
    }
}

impl RoomApi for MemoryRoomApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        Ok(self.online()?.rooms.values().cloned().collect())
    }

    async fn room_types(&self) -> Result<Vec<String>, ApiError> {
        let inner = self.online()?;
        let rooms: Vec<Room> = inner.rooms.values().cloned().collect();
        Ok(rooms::distinct_types(&rooms))
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, ApiError> {
        self.online()?
            .rooms
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    async fn create_room(&self, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
        let mut inner = self.online()?;
        inner.next_id += 1;
        let id = RoomId(inner.next_id);
        let room = Room {
            id,
            room_type: draft.room_type.trim().to_string(),
            room_price: price,
            room_description: draft.room_description.clone(),
            photo: draft.photo.as_ref().map(encode_photo),
            booked: false,
        };
        inner.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn update_room(&self, id: RoomId, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
        let mut inner = self.online()?;
        let Some(room) = inner.rooms.get_mut(&id) else {
            return Err(ApiError::Status {
                status: 404,
                message: format!("Room not found: {id}"),
            });
        };
        room.room_type = draft.room_type.trim().to_string();
        room.room_price = price;
        room.room_description = draft.room_description.clone();
        if let Some(photo) = &draft.photo {
            room.photo = Some(encode_photo(photo));
        }
        Ok(room.clone())
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
        let mut inner = self.online()?;
        inner.rooms.remove(&id);
        inner.bookings.retain(|b| b.room_id != id);
        Ok(())
    }

    async fn available_rooms(&self, search: &ValidSearch) -> Result<Vec<Room>, ApiError> {
        let inner = self.online()?;
        Ok(inner
            .rooms
            .values()
            .filter(|room| search.room_type.is_empty() || room.room_type == search.room_type)
            .filter(|room| {
                !inner
                    .bookings
                    .iter()
                    .any(|b| b.room_id == room.id && b.overlaps(search))
            })
            .cloned()
            .collect())
    }

    async fn export_rooms(&self) -> Result<Vec<u8>, ApiError> {
        let inner = self.online()?;
        let mut out = String::from("ID,Tipo de Habitación,Precio de Habitación\n");
        for room in inner.rooms.values() {
            out.push_str(&format!("{},{},{}\n", room.id, room.room_type, room.room_price));
        }
        Ok(out.into_bytes())
    }
}
