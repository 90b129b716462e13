use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::rooms::RoomMember,
    repositories::is_duplicate_key_error,
};
use singleton_macro::repository;

/// 방 참여 정보 저장소
///
/// 방의 참여 인원 수는 캐싱하지 않고 이 컬렉션에서 매번 집계합니다.
#[repository(name = "roommember", collection = "room_members")]
pub struct RoomMemberRepository {
    db: Arc<Database>,
}

impl RoomMemberRepository {
    /// 참여 정보 추가
    ///
    /// 이미 같은 방에 참여 중이면 `ConflictError`를 반환합니다.
    pub async fn add(&self, mut membership: RoomMember) -> Result<RoomMember, AppError> {
        let result = self.collection::<RoomMember>()
            .insert_one(&membership)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 참여 중인 방입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        membership.id = result.inserted_id.as_object_id();
        Ok(membership)
    }

    /// 참여 정보 삭제, 삭제된 문서가 있었는지 반환
    pub async fn remove(&self, room_id: &ObjectId, member_id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection::<RoomMember>()
            .delete_one(doc! { "room_id": *room_id, "member_id": *member_id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    pub async fn exists(&self, room_id: &ObjectId, member_id: &ObjectId) -> Result<bool, AppError> {
        let count = self.collection::<RoomMember>()
            .count_documents(doc! { "room_id": *room_id, "member_id": *member_id })
            .await?;

        Ok(count > 0)
    }

    pub async fn count_by_room(&self, room_id: &ObjectId) -> Result<u64, AppError> {
        Ok(self.collection::<RoomMember>()
            .count_documents(doc! { "room_id": *room_id })
            .await?)
    }

    /// 회원이 참여 중인 방 ID 목록 (최근 참여순)
    pub async fn find_room_ids_by_member(&self, member_id: &ObjectId) -> Result<Vec<ObjectId>, AppError> {
        let cursor = self.collection::<RoomMember>()
            .find(doc! { "member_id": *member_id })
            .sort(doc! { "joined_at": -1 })
            .await?;

        let memberships: Vec<RoomMember> = cursor.try_collect().await?;

        Ok(memberships.into_iter().map(|m| m.room_id).collect())
    }

    /// 방 삭제 시 참여 정보 일괄 삭제
    pub async fn delete_by_room(&self, room_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<RoomMember>()
            .delete_many(doc! { "room_id": *room_id })
            .await?;

        Ok(result.deleted_count)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let unique_membership = IndexModel::builder()
            .keys(doc! { "room_id": 1, "member_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("room_member_unique".to_string())
                .build())
            .build();

        let member_index = IndexModel::builder()
            .keys(doc! { "member_id": 1 })
            .options(IndexOptions::builder()
                .name("member_id".to_string())
                .build())
            .build();

        self.collection::<RoomMember>()
            .create_indexes([unique_membership, member_index])
            .await?;

        Ok(())
    }
}
