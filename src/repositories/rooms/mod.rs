//! 방 관련 리포지토리
//!
//! - [`room_repo`] - 방 문서 CRUD 및 목록 조회
//! - [`room_member_repo`] - 방 참여 정보와 인원 수 집계

pub mod room_repo;
pub mod room_member_repo;

pub use room_repo::RoomRepository;
pub use room_member_repo::RoomMemberRepository;
