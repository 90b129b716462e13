//! 인증 서비스 모듈
//!
//! - [`TokenService`] - 서비스 JWT 액세스/리프레시 토큰 발급과 검증
//! - [`GoogleAuthService`] - Google ID 토큰 로그인과 토큰 갱신
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenService, GoogleAuthService};
//!
//! let login = GoogleAuthService::instance().login(request).await?;
//! let claims = TokenService::instance().verify_access_token(&login.access_token)?;
//! ```

pub mod token_service;
pub mod google_auth_service;

pub use token_service::*;
pub use google_auth_service::*;
