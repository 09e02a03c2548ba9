//! # API crate: the REST collaborator behind every room screen
//!
//! The admin UI owns no authoritative state; every screen reads from and writes
//! to the hotel backend through the [`RoomApi`] trait defined here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpRoomApi`], the reqwest client used by the browser build |
//! | [`memory`] | [`MemoryRoomApi`], an in-process backend for tests and offline runs |
//! | [`workflows`] | Mutation-then-refetch sequences and the validated availability search |
//!
//! ## Operations
//!
//! - **Reads**: `list_rooms`, `room_types`, `get_room`, `available_rooms`
//! - **Writes**: `create_room`, `update_room`, `delete_room`
//! - **Export**: `export_rooms` returns the spreadsheet bytes produced by the backend

use std::future::Future;

use rooms::{Room, RoomDraft, RoomId, ValidSearch};

mod error;
pub mod http;
pub mod memory;
pub mod workflows;

pub use error::{ApiError, SearchFailure, SubmitFailure};
pub use http::HttpRoomApi;
pub use memory::MemoryRoomApi;
pub use workflows::{create_room, delete_room_and_refresh, search_available, update_room_and_reload};

/// Async interface to the room backend.
pub trait RoomApi {
    fn list_rooms(&self) -> impl Future<Output = Result<Vec<Room>, ApiError>>;

    fn room_types(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;

    fn get_room(&self, id: RoomId) -> impl Future<Output = Result<Room, ApiError>>;

    /// `price` is the validated integer from [`RoomDraft::validate`].
    fn create_room(
        &self,
        draft: &RoomDraft,
        price: u64,
    ) -> impl Future<Output = Result<Room, ApiError>>;

    /// Send the full record. A non-success status comes back as [`ApiError::Status`].
    fn update_room(
        &self,
        id: RoomId,
        draft: &RoomDraft,
        price: u64,
    ) -> impl Future<Output = Result<Room, ApiError>>;

    fn delete_room(&self, id: RoomId) -> impl Future<Output = Result<(), ApiError>>;

    fn available_rooms(
        &self,
        search: &ValidSearch,
    ) -> impl Future<Output = Result<Vec<Room>, ApiError>>;

    fn export_rooms(&self) -> impl Future<Output = Result<Vec<u8>, ApiError>>;
}
