//! Member HTTP Handlers
use actix_web::{get, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::models::auth::AuthenticatedUser,
    services::members::MemberService,
};

/// 로그인한 회원 정보
///
/// `GET /api/v1/members/me`
#[get("/me")]
pub async fn get_me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = MemberService::instance();
    let member = service.get_me(&user.member_id).await?;

    Ok(HttpResponse::Ok().json(member))
}
