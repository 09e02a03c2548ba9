//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;
pub mod views;

pub const ROOMS_CSS: Asset = asset!("/assets/rooms.css");

mod client;
pub use client::{client, use_config, BackendProvider};

mod banner;
pub use banner::{use_banner, Banner, BannerHandle, BannerKind, BannerState, BannerView};

mod navbar;
pub use navbar::Navbar;

mod room_type_selector;
pub use room_type_selector::RoomTypeSelector;

mod room_filter;
pub use room_filter::RoomFilter;

mod room_paginator;
pub use room_paginator::RoomPaginator;

mod room_search_results;
pub use room_search_results::{RoomCard, RoomSearchResults};

mod room_search;
pub use room_search::RoomSearch;
