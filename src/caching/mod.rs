//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시를 제공합니다.
//! 방(Room)과 회원(Member) 문서를 ID 기준으로 캐싱하고, 변경 시 무효화합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("member_repository:64f1...", &member, 600).await?;
//!
//! let cached: Option<Member> = cache.get("member_repository:64f1...").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
