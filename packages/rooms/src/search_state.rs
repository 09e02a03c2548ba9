//! What the availability search screen shows between and during searches.

use crate::listing::Pagination;
use crate::models::Room;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    results: Vec<Room>,
    searched: bool,
    loading: bool,
    error: Option<String>,
    pagination: Pagination,
}

impl SearchState {
    pub fn new(per_page: usize) -> Self {
        Self {
            pagination: Pagination::new(per_page),
            ..Self::default()
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// New results replace the old ones and start from the first page.
    /// Loading stays on until [`finish`](Self::finish).
    pub fn succeed(&mut self, rooms: Vec<Room>) {
        self.error = None;
        self.results = rooms;
        self.searched = true;
        self.pagination.reset();
    }

    /// The form was rejected before any request went out.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// The request failed. Results already on screen stay there.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Drop a stale error once both dates parse again.
    pub fn edited(&mut self, dates_parse: bool) {
        if dates_parse {
            self.error = None;
        }
    }

    pub fn clear(&mut self) {
        let per_page = self.pagination.per_page;
        *self = Self::new(per_page);
    }

    pub fn go_to(&mut self, page: usize) {
        self.pagination.go_to(page, self.results.len());
    }

    pub fn results(&self) -> &[Room] {
        &self.results
    }

    /// Rooms on the current page.
    pub fn visible(&self) -> &[Room] {
        self.pagination.page(&self.results)
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.results.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A search ran, finished, and found nothing.
    pub fn shows_no_results(&self) -> bool {
        self.searched && !self.loading && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomId;

    fn rooms(ids: std::ops::RangeInclusive<u64>) -> Vec<Room> {
        ids.map(|id| Room {
            id: RoomId(id),
            room_type: "Single".into(),
            room_price: 80,
            ..Room::default()
        })
        .collect()
    }

    #[test]
    fn test_success_shows_first_page() {
        let mut state = SearchState::new(8);
        state.begin();
        state.succeed(rooms(1..=20));
        assert!(state.is_loading());
        state.finish();

        assert!(!state.is_loading());
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible().len(), 8);
        assert_eq!(state.visible()[0].id, RoomId(1));
        assert!(!state.shows_no_results());
    }

    #[test]
    fn test_new_search_with_same_count_restarts_paging() {
        let mut state = SearchState::new(8);
        state.succeed(rooms(1..=20));
        state.go_to(3);
        assert_eq!(state.visible()[0].id, RoomId(17));

        state.begin();
        state.succeed(rooms(101..=120));
        state.finish();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible()[0].id, RoomId(101));
    }

    #[test]
    fn test_invalid_form_sets_error_only() {
        let mut state = SearchState::new(8);
        state.succeed(rooms(1..=2));
        state.finish();
        state.begin();
        state.reject("Por favor introduce fechas válidas");

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Por favor introduce fechas válidas"));
        assert_eq!(state.results().len(), 2);

        state.edited(false);
        assert!(state.error().is_some());
        state.edited(true);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_transport_failure_keeps_results() {
        let mut state = SearchState::new(8);
        state.succeed(rooms(1..=10));
        state.finish();
        state.go_to(2);

        state.begin();
        state.fail("Error de red: connection refused");
        assert!(!state.is_loading());
        assert_eq!(state.results().len(), 10);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.error(), Some("Error de red: connection refused"));
    }

    #[test]
    fn test_empty_result_message_and_clear() {
        let mut state = SearchState::new(4);
        assert!(!state.shows_no_results());
        state.begin();
        state.succeed(Vec::new());
        assert!(!state.shows_no_results());
        state.finish();
        assert!(state.shows_no_results());

        state.fail("Error de red");
        state.clear();
        assert_eq!(state, SearchState::new(4));
        assert_eq!(state.error(), None);
    }
}
