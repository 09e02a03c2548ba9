//! Filtering and pagination of the existing-rooms table.
//!
//! Everything here is derived from the loaded room list and never stored.

use crate::models::Room;

pub const DEFAULT_ROOMS_PER_PAGE: usize = 8;

/// Rooms whose type equals `room_type` exactly. An empty selection keeps every room.
pub fn filter_by_type(rooms: &[Room], room_type: &str) -> Vec<Room> {
    if room_type.is_empty() {
        return rooms.to_vec();
    }
    rooms
        .iter()
        .filter(|room| room.room_type == room_type)
        .cloned()
        .collect()
}

/// Distinct room types in first-seen order, for the filter dropdown.
pub fn distinct_types(rooms: &[Room]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for room in rooms {
        if !room.room_type.is_empty() && !types.contains(&room.room_type) {
            types.push(room.room_type.clone());
        }
    }
    types
}

/// Current page of a paginated list. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROOMS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(per_page: usize) -> Self {
        Self {
            current_page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    /// The items shown on the current page: `[(k-1)*per_page, k*per_page)`.
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page.max(1) - 1) * self.per_page;
        if start >= items.len() {
            return &items[..0];
        }
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }

    /// Move to `page`, clamped to `1..=total_pages`.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len).max(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomId;

    fn room(id: u64, room_type: &str) -> Room {
        Room {
            id: RoomId(id),
            room_type: room_type.into(),
            room_price: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_single_rooms() {
        let rooms = vec![room(1, "Single"), room(2, "Suite"), room(3, "Single")];
        let filtered = filter_by_type(&rooms, "Single");
        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RoomId(1), RoomId(3)]);
        assert_eq!(Pagination::default().total_pages(filtered.len()), 1);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let rooms = vec![room(1, "Single"), room(2, "Suite")];
        assert_eq!(filter_by_type(&rooms, ""), rooms);
    }

    #[test]
    fn test_filter_is_exact_match() {
        let rooms = vec![room(1, "Single"), room(2, "single"), room(3, "Single Deluxe")];
        assert_eq!(filter_by_type(&rooms, "Single").len(), 1);
        assert!(filter_by_type(&rooms, "Double").is_empty());
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::default();
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(8), 1);
        assert_eq!(p.total_pages(9), 2);
        assert_eq!(p.total_pages(17), 3);
    }

    #[test]
    fn test_page_offsets() {
        let items: Vec<usize> = (0..20).collect();
        let mut p = Pagination::default();
        assert_eq!(p.page(&items), &items[0..8]);
        p.go_to(2, items.len());
        assert_eq!(p.page(&items), &items[8..16]);
        p.go_to(3, items.len());
        assert_eq!(p.page(&items), &items[16..20]);
        p.go_to(9, items.len());
        assert_eq!(p.current_page, 3);
        p.reset();
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items = [1, 2, 3];
        let p = Pagination {
            current_page: 4,
            per_page: 8,
        };
        assert!(p.page(&items).is_empty());
    }

    #[test]
    fn test_distinct_types_in_order() {
        let rooms = vec![room(1, "Suite"), room(2, "Single"), room(3, "Suite"), room(4, "")];
        assert_eq!(distinct_types(&rooms), vec!["Suite", "Single"]);
    }
}
