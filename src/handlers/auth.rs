//! Authentication HTTP Handlers
//!
//! Google ID 토큰 로그인과 토큰 갱신 엔드포인트입니다. 두 경로 모두 인증 없이 호출합니다.
//!
//! - `POST /api/v1/auth/google` - `{ "idToken": "..." }` → `LoginResponse`
//! - `POST /api/v1/auth/refresh` - `{ "refreshToken": "..." }` → `TokenResponse`
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::auth::request::{GoogleLoginRequest, RefreshTokenRequest},
    services::auth::GoogleAuthService,
};

/// Google ID 토큰 로그인
#[post("/google")]
pub async fn google_login(
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let google_auth = GoogleAuthService::instance();
    let response = google_auth.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 리프레시 토큰으로 토큰 쌍 재발급
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let google_auth = GoogleAuthService::instance();
    let response = google_auth.refresh(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
