//! # 방 관리 서비스
//!
//! 방 생성부터 삭제까지의 규칙을 담당합니다.
//!
//! ## 참여 규칙
//!
//! | 요청 | 조건 | 결과 |
//! |------|------|------|
//! | 생성 | 제목 2~100자 | 201, 호스트 자동 참여 (`memberCount: 1`) |
//! | 참여 | 비밀번호 없는 방 | 200 |
//! | 참여 | 비밀번호가 설정된 방 | 403 |
//! | 참여 | 이미 참여 중 | 409 |
//! | 나가기 | 호스트 | 409 (삭제만 가능) |
//! | 나가기 | 참여하지 않은 방 | 404 |
//! | 삭제 | 호스트가 아님 | 403 |
//!
//! 호스트 ID는 항상 인증된 세션에서 받으며 요청 본문의 값은 사용하지 않습니다.
//! 요청 DTO 검증은 핸들러에서 끝난 상태로 들어옵니다.

use std::sync::Arc;
use futures_util::future::try_join_all;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::rooms::{RoomCreateRequest, RoomListQuery, RoomPageResponse, RoomResponse},
        entities::rooms::{Room, RoomMember},
    },
    repositories::rooms::{RoomMemberRepository, RoomRepository},
    utils::object_id::parse_object_id,
};

#[service(name = "room")]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
    room_member_repo: Arc<RoomMemberRepository>,
}

impl RoomService {
    /// 방 생성
    ///
    /// 방을 저장한 뒤 호스트를 첫 참여자로 등록합니다.
    /// 호스트 등록에 실패하면 저장한 방을 지우고 에러를 돌려줍니다.
    pub async fn create_room(
        &self,
        host_member_id: ObjectId,
        request: RoomCreateRequest,
    ) -> Result<RoomResponse, AppError> {
        let room = self.room_repo.create(request.to_entity(host_member_id)).await?;
        let room_id = room.id.ok_or_else(|| AppError::InternalError("방 ID가 없습니다".to_string()))?;

        if let Err(e) = self.room_member_repo.add(RoomMember::new(room_id, host_member_id)).await {
            log::error!("호스트 참여 등록 실패, 방 삭제: {} ({})", room_id, e);
            if let Err(rollback) = self.room_repo.delete(&room_id).await {
                log::error!("방 롤백 실패, 참여자 없는 방이 남았습니다: {} ({})", room_id, rollback);
            }
            return Err(e);
        }

        log::info!("방 생성: {} (호스트: {})", room_id, host_member_id);
        Ok(RoomResponse::from(room, 1))
    }

    pub async fn get_room(&self, room_id: &str) -> Result<RoomResponse, AppError> {
        let room = self.load_room(room_id).await?;
        self.to_response(room).await
    }

    /// 최신순 방 목록
    pub async fn list_rooms(&self, query: RoomListQuery) -> Result<RoomPageResponse, AppError> {
        let rooms = self.room_repo.find_page(query.skip(), query.size()).await?;

        Ok(RoomPageResponse {
            rooms: self.to_responses(rooms).await?,
            page: query.page(),
            size: query.size(),
        })
    }

    /// 회원이 참여 중인 방 목록 (호스트인 방 포함)
    pub async fn list_my_rooms(&self, member_id: &ObjectId) -> Result<Vec<RoomResponse>, AppError> {
        let room_ids = self.room_member_repo.find_room_ids_by_member(member_id).await?;
        let rooms = self.room_repo.find_by_ids(&room_ids).await?;

        self.to_responses(rooms).await
    }

    pub async fn join_room(&self, room_id: &str, member_id: &ObjectId) -> Result<RoomResponse, AppError> {
        let room = self.load_room(room_id).await?;
        let object_id = self.room_object_id(&room)?;

        let already_member = self.room_member_repo.exists(&object_id, member_id).await?;
        check_joinable(&room, already_member)?;

        self.room_member_repo.add(RoomMember::new(object_id, *member_id)).await?;

        log::info!("방 참여: {} (회원: {})", object_id, member_id);
        self.to_response(room).await
    }

    pub async fn leave_room(&self, room_id: &str, member_id: &ObjectId) -> Result<(), AppError> {
        let room = self.load_room(room_id).await?;
        let object_id = self.room_object_id(&room)?;

        let is_member = self.room_member_repo.exists(&object_id, member_id).await?;
        check_leavable(&room, member_id, is_member)?;

        // exists 이후 다른 요청이 먼저 나갔을 수 있음
        if !self.room_member_repo.remove(&object_id, member_id).await? {
            return Err(not_a_member());
        }

        log::info!("방 나가기: {} (회원: {})", object_id, member_id);
        Ok(())
    }

    /// 방 삭제 (호스트 전용)
    pub async fn delete_room(&self, room_id: &str, member_id: &ObjectId) -> Result<(), AppError> {
        let room = self.load_room(room_id).await?;
        let object_id = self.room_object_id(&room)?;

        check_deletable(&room, member_id)?;

        let removed = self.room_member_repo.delete_by_room(&object_id).await?;
        self.room_repo.delete(&object_id).await?;

        log::info!("방 삭제: {} (참여 정보 {}건 정리)", object_id, removed);
        Ok(())
    }

    async fn load_room(&self, room_id: &str) -> Result<Room, AppError> {
        let object_id = parse_object_id(room_id, "방")?;

        self.room_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("방을 찾을 수 없습니다: {}", room_id)))
    }

    fn room_object_id(&self, room: &Room) -> Result<ObjectId, AppError> {
        room.id.ok_or_else(|| AppError::InternalError("방 ID가 없습니다".to_string()))
    }

    async fn to_response(&self, room: Room) -> Result<RoomResponse, AppError> {
        let object_id = self.room_object_id(&room)?;
        let member_count = self.room_member_repo.count_by_room(&object_id).await?;
        Ok(RoomResponse::from(room, member_count))
    }

    async fn to_responses(&self, rooms: Vec<Room>) -> Result<Vec<RoomResponse>, AppError> {
        try_join_all(rooms.into_iter().map(|room| self.to_response(room))).await
    }
}

/// 참여 가능 여부
///
/// 이미 참여 중이면 409, 비밀번호가 설정된 방이면 403.
fn check_joinable(room: &Room, already_member: bool) -> Result<(), AppError> {
    if already_member {
        return Err(AppError::ConflictError("이미 참여 중인 방입니다".to_string()));
    }

    if room.has_password() {
        return Err(AppError::AuthorizationError("비밀번호가 설정된 방에는 참여할 수 없습니다".to_string()));
    }

    Ok(())
}

/// 나가기 가능 여부
///
/// 호스트는 참여 여부와 관계없이 409, 참여하지 않은 회원은 404.
fn check_leavable(room: &Room, member_id: &ObjectId, is_member: bool) -> Result<(), AppError> {
    if room.is_hosted_by(member_id) {
        return Err(AppError::ConflictError("호스트는 방을 나갈 수 없습니다. 방을 삭제해주세요".to_string()));
    }

    if !is_member {
        return Err(not_a_member());
    }

    Ok(())
}

fn check_deletable(room: &Room, member_id: &ObjectId) -> Result<(), AppError> {
    if !room.is_hosted_by(member_id) {
        return Err(AppError::AuthorizationError("방 삭제는 호스트만 할 수 있습니다".to_string()));
    }

    Ok(())
}

fn not_a_member() -> AppError {
    AppError::NotFound("참여 중인 방이 아닙니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(password: Option<&str>) -> Room {
        Room {
            id: Some(ObjectId::new()),
            host_member_id: ObjectId::new(),
            title: "주말 브이로그 편집".to_string(),
            password: password.map(str::to_string),
            context: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_join_open_room() {
        assert!(check_joinable(&room(None), false).is_ok());
        assert!(check_joinable(&room(Some("")), false).is_ok());
    }

    #[test]
    fn test_join_password_room_is_forbidden() {
        let result = check_joinable(&room(Some("1234")), false);
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_join_twice_is_conflict() {
        let result = check_joinable(&room(None), true);
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        // 이미 참여 중이면 비밀번호 여부보다 먼저 409
        let result = check_joinable(&room(Some("1234")), true);
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_member_can_leave() {
        assert!(check_leavable(&room(None), &ObjectId::new(), true).is_ok());
    }

    #[test]
    fn test_host_cannot_leave() {
        let room = room(None);
        let host = room.host_member_id;

        let result = check_leavable(&room, &host, true);
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_non_member_leave_is_not_found() {
        let result = check_leavable(&room(None), &ObjectId::new(), false);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_only_host_can_delete() {
        let room = room(Some("1234"));
        let host = room.host_member_id;

        assert!(check_deletable(&room, &host).is_ok());

        let result = check_deletable(&room, &ObjectId::new());
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }
}
