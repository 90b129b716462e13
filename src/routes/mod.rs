//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Route Table
//!
//! | 스코프 | 인증 | 핸들러 |
//! |--------|------|--------|
//! | `/health` | 없음 | 헬스체크 |
//! | `/api/v1/auth` | 없음 | Google 로그인, 토큰 갱신 |
//! | `/api/v1/members` | `user` 또는 `admin` | 내 정보 |
//! | `/api/v1/rooms` | `user` 또는 `admin` | 방 CRUD, 참여, 나가기 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(configure_extractors)
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_member_routes(cfg);
    configure_room_routes(cfg);
}

/// JSON 본문/쿼리 파싱 실패를 `AppError` 형식의 400 응답으로 바꿉니다.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| {
            log::debug!("요청 본문 파싱 실패: {}", err);
            AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
        }),
    );
    cfg.app_data(
        web::QueryConfig::default().error_handler(|err, _req| {
            AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
        }),
    );
}

/// 인증 관련 라우트 (Public)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/google \
///   -H "Content-Type: application/json" \
///   -d '{"idToken":"eyJhbGciOiJSUzI1NiIs..."}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::refresh_tokens)
    );
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/members")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::members::get_me)
    );
}

/// 방 관련 라우트 (Protected)
///
/// `/me`는 `/{room_id}`보다 먼저 등록해야 방 ID로 해석되지 않습니다.
fn configure_room_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rooms")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::rooms::create_room)
            .service(handlers::rooms::list_rooms)
            .service(handlers::rooms::list_my_rooms)
            .service(handlers::rooms::get_room)
            .service(handlers::rooms::join_room)
            .service(handlers::rooms::leave_room)
            .service(handlers::rooms::delete_room)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "storycut_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "storycut_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
