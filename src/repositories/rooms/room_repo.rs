use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    config::RoomConfig,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::rooms::Room,
};
use singleton_macro::repository;

/// 방 문서 저장소
///
/// 단건 조회는 `room_repository:{id}` 키로 Redis에 캐싱합니다.
#[repository(name = "room", collection = "rooms")]
pub struct RoomRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl RoomRepository {
    /// 새 방을 저장하고 ID와 생성/수정 시각이 채워진 엔티티를 반환합니다.
    pub async fn create(&self, mut room: Room) -> Result<Room, AppError> {
        let now = DateTime::now();
        room.created_at = Some(now);
        room.updated_at = Some(now);

        let result = self.collection::<Room>()
            .insert_one(&room)
            .await?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::DatabaseError("저장된 방 ID를 확인할 수 없습니다".to_string()))?;
        room.id = Some(id);

        log::debug!("방 저장 완료: {}", id);
        Ok(room)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Room>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Room>(&cache_key).await {
            return Ok(Some(cached));
        }

        let room = self.collection::<Room>()
            .find_one(doc! { "_id": *id })
            .await?;

        if let Some(ref room) = room {
            let _ = self.redis
                .set_with_expiry(&cache_key, room, RoomConfig::cache_ttl_seconds())
                .await;
        }

        Ok(room)
    }

    /// 최신순 방 목록
    pub async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Room>, AppError> {
        let cursor = self.collection::<Room>()
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(skip)
            .limit(i64::from(limit))
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// 주어진 ID 목록에 해당하는 방들 (최신순)
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Room>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection::<Room>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection::<Room>()
            .delete_one(doc! { "_id": *id })
            .await?;

        let _ = self.invalidate_cache(&id.to_hex()).await;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let host_index = IndexModel::builder()
            .keys(doc! { "host_member_id": 1 })
            .options(IndexOptions::builder()
                .name("host_member_id".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection::<Room>()
            .create_indexes([host_index, created_at_index])
            .await?;

        Ok(())
    }
}
