use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar above every page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Buscar habitaciones" }
            Link { to: Route::ExistingRooms {}, "Habitaciones existentes" }
            Link { to: Route::AddRoom {}, "Agregar habitación" }
        }
        Outlet::<Route> {}
    }
}
