use dioxus::prelude::*;

use rooms::{InventoryConfig, RoomId};
use ui::BackendProvider;
use views::{AddRoom, EditRoom, ExistingRooms, Home, NotFound, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/add-room")]
        AddRoom {},
        #[route("/edit-room/:room_id")]
        EditRoom { room_id: RoomId },
        #[route("/existing-rooms")]
        ExistingRooms {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../inventory.toml");

/// Embedded config, with the backend URL overridable at build time.
fn load_config() -> InventoryConfig {
    let config = InventoryConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid inventory.toml, using defaults: {e}");
        InventoryConfig::default()
    });
    match option_env!("ROOMS_API_URL") {
        Some(url) if !url.is_empty() => config.with_api_url(url),
        _ => config,
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = InventoryConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.rooms.per_page, 8);
        assert_eq!(config.banner.clear_after_secs, 3);
        assert!(!load_config().api.base_url.is_empty());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(
            Route::EditRoom { room_id: RoomId(12) }.to_string(),
            "/edit-room/12"
        );
        assert_eq!(
            "/edit-room/5".parse::<Route>().ok(),
            Some(Route::EditRoom { room_id: RoomId(5) })
        );
        assert_eq!(
            "/existing-rooms".parse::<Route>().ok(),
            Some(Route::ExistingRooms {})
        );
    }
}
