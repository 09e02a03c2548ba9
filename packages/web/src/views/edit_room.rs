use dioxus::prelude::*;
use rooms::RoomId;
use ui::views::EditRoomView;

use crate::Route;

#[component]
pub fn EditRoom(room_id: RoomId) -> Element {
    let nav = use_navigator();

    rsx! {
        EditRoomView {
            room_id,
            on_back: move |_| {
                nav.push(Route::ExistingRooms {});
            },
        }
    }
}
