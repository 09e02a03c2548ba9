use dioxus::prelude::*;
use ui::views::ExistingRoomsView;

use crate::Route;

#[component]
pub fn ExistingRooms() -> Element {
    let nav = use_navigator();

    rsx! {
        ExistingRoomsView {
            on_add_room: move |_| {
                nav.push(Route::AddRoom {});
            },
            on_edit_room: move |room_id| {
                nav.push(Route::EditRoom { room_id });
            },
        }
    }
}
