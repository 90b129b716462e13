pub mod room_response;

pub use room_response::{RoomResponse, RoomPageResponse};
