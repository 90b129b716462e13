//! Rooms Entity Module
//!
//! 방(Room)과 방 참여 정보(RoomMember) 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::rooms::{Room, RoomMember};
//!
//! let room = request.to_entity(host_member_id);
//! let saved = room_repo.create(room).await?;
//!
//! let membership = RoomMember::new(saved_id, host_member_id);
//! room_member_repo.add(membership).await?;
//! ```

pub mod room;
pub mod room_member;

pub use room::Room;
pub use room_member::RoomMember;
