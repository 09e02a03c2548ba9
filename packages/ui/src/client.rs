//! Backend client and configuration, shared through context.
//!
//! The web binary wraps the router in [`BackendProvider`]. Views read the
//! config in their body with [`use_config`] and grab the client with
//! [`client`] inside event handlers, so handler closures only capture `Copy`
//! signals.

use api::HttpRoomApi;
use dioxus::prelude::*;
use rooms::InventoryConfig;

/// Provider component for the config and a client built from it.
#[component]
pub fn BackendProvider(config: InventoryConfig, children: Element) -> Element {
    let base_url = config.api.base_url.clone();
    use_context_provider(|| config);
    use_context_provider(move || {
        tracing::info!("Room backend at {base_url}");
        HttpRoomApi::new(base_url)
    });

    rsx! {
        {children}
    }
}

pub fn use_config() -> InventoryConfig {
    use_context::<InventoryConfig>()
}

/// The backend client. Call from a component, handler, or before `spawn`.
pub fn client() -> HttpRoomApi {
    consume_context::<HttpRoomApi>()
}
