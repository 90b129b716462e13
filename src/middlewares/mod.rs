//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer {token}` 헤더에서 액세스 토큰 추출 및 검증
//! - 검증된 회원 정보(`AuthenticatedUser`)를 request extension에 저장
//! - 역할 요구사항 검사 (403)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/rooms")
//!     .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
//!     .service(create_room)
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
