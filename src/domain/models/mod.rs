//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! | 구분 | Entities (`../entities/`) | Models (`./`) |
//! |------|---------------------------|---------------|
//! | 저장 | MongoDB 문서 | 메모리 / 토큰 / 외부 API 응답 |
//! | 식별 | `ObjectId` | 값 자체 |
//! | 예시 | `Room`, `Member` | `TokenClaims`, `GoogleIdTokenInfo` |
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← 요청 단위 인증 정보 (AuthenticatedUser, RequiredRole)
//! ├── oauth/   ← Google tokeninfo 응답과 클레임 검증 규칙
//! └── token/   ← JWT 클레임과 토큰 쌍
//! ```

pub mod auth;
pub mod oauth;
pub mod token;
