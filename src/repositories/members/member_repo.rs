use std::sync::Arc;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::members::Member,
    repositories::is_duplicate_key_error,
};
use singleton_macro::repository;

const MEMBER_CACHE_TTL_SECONDS: usize = 600;

#[repository(name = "member", collection = "members")]
pub struct MemberRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl MemberRepository {
    /// ID로 회원 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Member>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        let member = self.collection::<Member>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, MEMBER_CACHE_TTL_SECONDS)
                .await;
        }

        Ok(member)
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<Member>, AppError> {
        Ok(self.collection::<Member>()
            .find_one(doc! { "google_id": google_id })
            .await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AppError> {
        Ok(self.collection::<Member>()
            .find_one(doc! { "email": email })
            .await?)
    }

    /// 회원 생성
    ///
    /// 이메일 또는 Google ID가 이미 등록되어 있으면 `ConflictError`.
    pub async fn create(&self, mut member: Member) -> Result<Member, AppError> {
        let result = self.collection::<Member>()
            .insert_one(&member)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 가입된 계정입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::DatabaseError("저장된 회원 ID를 확인할 수 없습니다".to_string()))?;
        member.id = Some(id);

        log::info!("신규 회원 등록: {} ({})", member.email, id);
        Ok(member)
    }

    /// 마지막 로그인 시각 갱신
    ///
    /// `link_google_id`가 주어지면 이메일로 찾은 기존 회원에 Google 계정을 연결합니다.
    pub async fn touch_last_login(
        &self,
        id: &ObjectId,
        link_google_id: Option<&str>,
    ) -> Result<Option<Member>, AppError> {
        let now = DateTime::now();
        let mut set = doc! {
            "last_login_at": now,
            "updated_at": now,
        };
        if let Some(google_id) = link_google_id {
            set.insert("google_id", google_id);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<Member>()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(options)
            .await?;

        let _ = self.invalidate_cache(&id.to_hex()).await;

        Ok(updated)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let google_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        self.collection::<Member>()
            .create_indexes([email_index, google_index])
            .await?;

        Ok(())
    }
}
