//! Multi-step operations the screens run as a single task.
//!
//! A mutation and the read that follows it are awaited in sequence so the
//! second call always observes the first.

use rooms::{Room, RoomDraft, RoomId, SearchQuery};

use crate::error::{ApiError, SearchFailure, SubmitFailure};
use crate::RoomApi;

/// Validate the dates and, only if they are usable, run one availability query.
pub async fn search_available(
    api: &impl RoomApi,
    query: &SearchQuery,
) -> Result<Vec<Room>, SearchFailure> {
    let search = query.validate()?;
    tracing::debug!(
        "Searching {} .. {} type={:?}",
        search.check_in,
        search.check_out,
        search.room_type
    );
    Ok(api.available_rooms(&search).await?)
}

pub async fn create_room(api: &impl RoomApi, draft: &RoomDraft) -> Result<Room, SubmitFailure> {
    let price = draft.validate()?;
    Ok(api.create_room(draft, price).await?)
}

/// Send the edited record, then read back what the backend stored.
///
/// A failed read after an accepted update is reported as
/// [`SubmitFailure::Reload`], never as a rejected update.
pub async fn update_room_and_reload(
    api: &impl RoomApi,
    id: RoomId,
    draft: &RoomDraft,
) -> Result<Room, SubmitFailure> {
    let price = draft.validate()?;
    api.update_room(id, draft, price).await?;
    api.get_room(id).await.map_err(|e| {
        tracing::warn!("Room {id} updated but reload failed: {e}");
        SubmitFailure::Reload(e)
    })
}

/// Remove a room and return the fresh list.
pub async fn delete_room_and_refresh(api: &impl RoomApi, id: RoomId) -> Result<Vec<Room>, ApiError> {
    api.delete_room(id).await?;
    api.list_rooms().await
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rooms::{DraftError, PriceInput, SearchError, SearchState, ValidSearch};

    use super::*;
    use crate::MemoryRoomApi;

    /// Counts availability queries on top of a memory backend.
    #[derive(Default)]
    struct Counting {
        inner: MemoryRoomApi,
        searches: Cell<usize>,
        /// Make `get_room` fail while everything else keeps working.
        reads_fail: Cell<bool>,
    }

    impl RoomApi for Counting {
        async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
            self.inner.list_rooms().await
        }

        async fn room_types(&self) -> Result<Vec<String>, ApiError> {
            self.inner.room_types().await
        }

        async fn get_room(&self, id: RoomId) -> Result<Room, ApiError> {
            if self.reads_fail.get() {
                return Err(ApiError::NotFound(id));
            }
            self.inner.get_room(id).await
        }

        async fn create_room(&self, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
            self.inner.create_room(draft, price).await
        }

        async fn update_room(&self, id: RoomId, draft: &RoomDraft, price: u64) -> Result<Room, ApiError> {
            self.inner.update_room(id, draft, price).await
        }

        async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
            self.inner.delete_room(id).await
        }

        async fn available_rooms(&self, search: &ValidSearch) -> Result<Vec<Room>, ApiError> {
            self.searches.set(self.searches.get() + 1);
            self.inner.available_rooms(search).await
        }

        async fn export_rooms(&self) -> Result<Vec<u8>, ApiError> {
            self.inner.export_rooms().await
        }
    }

    fn query(check_in: &str, check_out: &str) -> SearchQuery {
        SearchQuery {
            check_in_date: check_in.into(),
            check_out_date: check_out.into(),
            room_type: String::new(),
        }
    }

    fn draft(room_type: &str, price: &str) -> RoomDraft {
        RoomDraft {
            room_type: room_type.into(),
            price: PriceInput::parse(price),
            room_description: "Con balcón".into(),
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_search_makes_no_call() {
        let api = Counting::default();
        for (a, b) in [("2024-01-10", "2024-01-05"), ("", "2024-01-05"), ("mañana", "")] {
            let err = search_available(&api, &query(a, b)).await.unwrap_err();
            assert!(matches!(err, SearchFailure::Invalid(_)));
            assert!(!err.to_string().is_empty());
        }
        assert_eq!(api.searches.get(), 0);
    }

    #[tokio::test]
    async fn test_out_of_order_message() {
        let api = Counting::default();
        let err = search_available(&api, &query("2024-01-10", "2024-01-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchFailure::Invalid(SearchError::CheckOutBeforeCheckIn)));
        assert_eq!(
            err.to_string(),
            "La fecha de salida debe ser posterior a la fecha de entrada."
        );
    }

    #[tokio::test]
    async fn test_valid_search_queries_once() {
        let api = Counting::default();
        api.inner.insert("Single", 80, "");
        api.inner.insert("Suite", 200, "");
        let rooms = search_available(&api, &query("2024-01-10", "2024-01-10")).await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(api.searches.get(), 1);
    }

    #[tokio::test]
    async fn test_search_transport_failure() {
        let api = Counting::default();
        api.inner.set_offline(true);
        let err = search_available(&api, &query("2024-01-10", "2024-01-12")).await.unwrap_err();
        assert!(matches!(err, SearchFailure::Api(ApiError::Transport(_))));
        assert_eq!(api.searches.get(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_refresh_excludes_room() {
        let api = MemoryRoomApi::new();
        let keep = api.insert("Single", 80, "");
        let gone = api.insert("Suite", 200, "");

        let rooms = delete_room_and_refresh(&api, gone).await.unwrap();
        assert!(rooms.iter().all(|r| r.id != gone));
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, keep);

        // Deleting again is harmless.
        let rooms = delete_room_and_refresh(&api, gone).await.unwrap();
        assert!(rooms.iter().all(|r| r.id != gone));
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let api = MemoryRoomApi::new();
        let created = create_room(&api, &draft("Double", "120")).await.unwrap();
        let fetched = api.get_room(created.id).await.unwrap();
        assert_eq!(fetched.room_type, "Double");
        assert_eq!(fetched.room_price, 120);
        assert_eq!(fetched.room_description, "Con balcón");
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_draft() {
        let api = MemoryRoomApi::new();
        let err = create_room(&api, &draft("Double", "abc")).await.unwrap_err();
        assert!(matches!(err, SubmitFailure::Invalid(DraftError::MissingPrice)));
        assert!(api.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_reloads_canonical_record() {
        let api = MemoryRoomApi::new();
        let id = api.insert("Single", 80, "Interior");
        let updated = update_room_and_reload(&api, id, &draft(" Single Deluxe ", "95"))
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.room_type, "Single Deluxe");
        assert_eq!(updated.room_price, 95);
    }

    #[tokio::test]
    async fn test_update_missing_room_is_status_failure() {
        let api = MemoryRoomApi::new();
        let err = update_room_and_reload(&api, RoomId(9), &draft("Single", "80"))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitFailure::Api(ref e) if e.is_status()));
    }

    #[tokio::test]
    async fn test_update_saved_but_reload_failed() {
        let api = Counting::default();
        let id = api.inner.insert("Single", 80, "Interior");
        api.reads_fail.set(true);

        let err = update_room_and_reload(&api, id, &draft("Suite", "200"))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitFailure::Reload(ApiError::NotFound(_))));
        assert!(!matches!(err, SubmitFailure::Api(_)));

        api.reads_fail.set(false);
        let stored = api.get_room(id).await.unwrap();
        assert_eq!(stored.room_type, "Suite");
        assert_eq!(stored.room_price, 200);
    }

    #[tokio::test]
    async fn test_search_state_keeps_results_on_transport_failure() {
        let api = Counting::default();
        api.inner.insert("Single", 80, "");
        api.inner.insert("Suite", 200, "");
        let mut state = SearchState::new(8);

        state.begin();
        let rooms = search_available(&api, &query("2024-01-10", "2024-01-12")).await.unwrap();
        state.succeed(rooms);
        state.finish();
        assert_eq!(state.results().len(), 2);

        api.inner.set_offline(true);
        state.begin();
        let err = search_available(&api, &query("2024-01-10", "2024-01-12")).await.unwrap_err();
        state.fail(err.to_string());

        assert!(!state.is_loading());
        assert_eq!(state.results().len(), 2);
        assert!(state.error().is_some_and(|m| m.starts_with("Error buscando")));
    }
}
