mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod existing_rooms;
pub use existing_rooms::ExistingRooms;

mod add_room;
pub use add_room::AddRoom;

mod edit_room;
pub use edit_room::EditRoom;

mod not_found;
pub use not_found::NotFound;
