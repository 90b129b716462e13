//! # Redis 캐시 클라이언트 구현
//!
//! Spring Framework의 RedisTemplate과 유사한 역할을 하는 JSON 캐시 클라이언트입니다.
//! `#[repository]` 매크로의 `redis` 필드로 주입되며, 매크로가 생성하는
//! `invalidate_cache` 계열 메서드가 `del`, `keys`, `del_multiple`을 사용합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager`가 멀티플렉싱된 단일 연결을 유지하고 끊어지면 재연결합니다.
//! 요청마다 매니저를 복제해서 사용하며 복제 비용은 크지 않습니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 캐시 클라이언트 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let cache = RedisClient::new().await?;
/// cache.set_with_expiry("room_repository:64f1...", &room, 600).await?;
///
/// let cached: Option<Room> = cache.get("room_repository:64f1...").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL` 환경 변수로 연결하고 `PING`으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// JSON으로 저장된 값을 읽어 역직렬화합니다. 키가 없으면 `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    RedisError::from((ErrorKind::TypeError, "Deserialization failed", e.to_string()))
                })
            })
            .transpose()
    }

    /// 값을 JSON으로 직렬화하여 TTL과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), RedisError> {
        let json = serde_json::to_string(value)
            .map_err(|e| RedisError::from((ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        let mut conn = self.manager.clone();
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.manager.clone();
        conn.keys(pattern).await
    }
}
