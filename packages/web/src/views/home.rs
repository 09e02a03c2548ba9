use dioxus::prelude::*;
use ui::RoomSearch;

#[component]
pub fn Home() -> Element {
    rsx! {
        RoomSearch {}
    }
}
