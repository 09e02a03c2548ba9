mod existing_rooms;
pub use existing_rooms::ExistingRoomsView;

mod add_room;
pub use add_room::AddRoomView;

mod edit_room;
pub use edit_room::EditRoomView;

mod not_found;
pub use not_found::NotFoundView;
