use dioxus::prelude::*;
use ui::views::AddRoomView;

use crate::Route;

#[component]
pub fn AddRoom() -> Element {
    let nav = use_navigator();

    rsx! {
        AddRoomView {
            on_existing_rooms: move |_| {
                nav.push(Route::ExistingRooms {});
            },
        }
    }
}
