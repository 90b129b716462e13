pub mod room_create_request;
pub mod room_list_query;

pub use room_create_request::RoomCreateRequest;
pub use room_list_query::RoomListQuery;
