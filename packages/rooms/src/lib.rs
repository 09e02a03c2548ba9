pub mod config;
pub mod listing;
pub mod models;
pub mod search;
pub mod search_state;

pub use config::InventoryConfig;
pub use listing::{distinct_types, filter_by_type, Pagination, DEFAULT_ROOMS_PER_PAGE};
pub use models::{DraftError, PhotoUpload, PriceInput, Room, RoomDraft, RoomId};
pub use search::{SearchError, SearchQuery, ValidSearch};
pub use search_state::SearchState;
