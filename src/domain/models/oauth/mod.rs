//! # Google Identity Models
//!
//! Google tokeninfo 엔드포인트 응답과 ID 토큰 클레임 검증 규칙을 정의합니다.

pub mod google_id_token;

pub use google_id_token::{GoogleIdTokenInfo, VerifiedGoogleAccount};
