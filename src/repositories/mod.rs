//! # Repository Layer
//!
//! MongoDB 컬렉션 접근을 담당하는 데이터 계층입니다.
//! 모든 리포지토리는 `#[repository]` 매크로로 싱글톤 등록되며,
//! `db` 필드에 `Database`, `redis` 필드에 `RedisClient`가 자동 주입됩니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |-----------|--------|------|
//! | `RoomRepository` | `rooms` | ID 기준 Redis 캐시 |
//! | `RoomMemberRepository` | `room_members` | 없음 (인원 수는 항상 DB 집계) |
//! | `MemberRepository` | `members` | ID 기준 Redis 캐시 |
//!
//! 캐시 읽기/쓰기 실패는 요청을 실패시키지 않고 DB 결과를 그대로 사용합니다.

pub mod rooms;
pub mod members;

use mongodb::error::{Error, ErrorKind, WriteFailure};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유일 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key_error(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 모든 컬렉션의 인덱스를 생성합니다.
///
/// 레지스트리 초기화 이후 서버 시작 전에 한 번 호출합니다.
/// 이미 존재하는 인덱스는 MongoDB가 무시합니다.
pub async fn ensure_indexes() -> Result<(), crate::core::errors::AppError> {
    rooms::RoomRepository::instance().create_indexes().await?;
    rooms::RoomMemberRepository::instance().create_indexes().await?;
    members::MemberRepository::instance().create_indexes().await?;

    log::info!("MongoDB 인덱스 확인 완료 (rooms, room_members, members)");
    Ok(())
}
