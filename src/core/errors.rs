//! # Application Error Handling System
//!
//! 스토리컷 백엔드의 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 일관된 JSON 에러 응답을 제공합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `MethodArgumentNotValidException` | `AppError::InvalidField` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::core::errors::AppError;
//!
//! async fn create_room(request: RoomCreateRequest) -> Result<RoomResponse, AppError> {
//!     // 필드 검증 실패는 InvalidField { field, message } 로 변환됩니다
//!     request.validate()?;
//!
//!     let room = self.room_repo.create(request.to_entity(host_id)).await?;
//!     Ok(RoomResponse::from(room, 1))
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 형식 오류 (잘못된 ID 등) |
//! | `InvalidField` | 400 Bad Request | 필드 제약 조건 위반 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 데이터, 비즈니스 규칙 위반 |
//! | `AuthenticationError` | 401 Unauthorized | 인증 실패 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `ExternalServiceError` | 502 Bad Gateway | Google 등 외부 API 오류 |
//! | `DatabaseError` / `RedisError` / `InternalError` | 500 | 인프라 및 예상치 못한 오류 |
//!
//! ## 응답 본문
//!
//! ```json
//! { "error": "Validation error: roomTitle: 방 제목은 2자 이상 100자 이하여야 합니다.",
//!   "field": "roomTitle",
//!   "message": "방 제목은 2자 이상 100자 이하여야 합니다." }
//! ```
//!
//! `field`와 `message`는 `InvalidField`에만 포함됩니다.

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 반환하면 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 (From 구현)
/// let room = collection.find_one(filter).await?;
///
/// // 문맥이 필요한 경우 직접 변환
/// redis_client.get::<Room>(&key).await
///     .map_err(|e| AppError::RedisError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력 형식 오류 (필드 단위가 아닌 경우)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 특정 필드의 제약 조건 위반
    ///
    /// 클라이언트가 어떤 입력을 고쳐야 하는지 알 수 있도록
    /// 필드 이름과 사용자 메시지를 함께 전달합니다.
    #[error("Validation error: {field}: {message}")]
    InvalidField { field: String, message: String },

    /// 요청한 리소스가 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 또는 현재 상태와 충돌하는 요청
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (토큰 누락, 만료, 위조 등)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증은 되었으나 권한 부족
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 API 호출 실패
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드 단위 검증 에러를 생성합니다.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::InvalidField { field, message } => serde_json::json!({
                "error": self.to_string(),
                "field": field,
                "message": message,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// `validator`의 검증 결과를 `InvalidField`로 변환합니다.
///
/// 여러 필드가 동시에 실패하면 필드 이름 순으로 첫 번째 에러를 사용합니다.
/// 메시지가 지정되지 않은 제약 조건은 에러 코드로 메시지를 만듭니다.
/// `field`는 클라이언트가 보낸 camelCase 이름(`roomTitle`)으로 바꿔 돌려줍니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("유효하지 않은 값입니다 ({})", err.code));
                    (wire_field_name(&field), message)
                })
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.into_iter().next() {
            Some((field, message)) => AppError::InvalidField { field, message },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

/// 요청 DTO는 모두 `#[serde(rename_all = "camelCase")]`이므로 같은 규칙으로 변환합니다.
fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    name
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 임의의 에러에 문맥 메시지를 붙여 `InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use validator::Validate;

    #[derive(Validate)]
    struct TwoFieldForm {
        #[validate(length(min = 2, message = "너무 짧습니다"))]
        b_field: String,
        #[validate(length(min = 2))]
        a_field: String,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("x".into()).error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ConflictError("x".into()).error_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::AuthenticationError("x".into()).error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::AuthorizationError("x".into()).error_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::ExternalServiceError("x".into()).error_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::DatabaseError("x".into()).error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_field_body_carries_field_and_message() {
        let error = AppError::invalid_field("roomTitle", "방 제목은 2자 이상 100자 이하여야 합니다.");
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["field"], "roomTitle");
        assert_eq!(json["message"], "방 제목은 2자 이상 100자 이하여야 합니다.");
    }

    #[test]
    fn test_from_validation_errors_picks_first_field_by_name() {
        let form = TwoFieldForm { b_field: "x".to_string(), a_field: "y".to_string() };
        let error: AppError = form.validate().unwrap_err().into();

        match error {
            AppError::InvalidField { field, message } => {
                assert_eq!(field, "aField");
                assert!(message.contains("length"));
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_from_validation_errors_uses_custom_message() {
        let form = TwoFieldForm { b_field: "x".to_string(), a_field: "ok".to_string() };
        let error: AppError = form.validate().unwrap_err().into();

        match error {
            AppError::InvalidField { field, message } => {
                assert_eq!(field, "bField");
                assert_eq!(message, "너무 짧습니다");
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_field_name_is_camel_case() {
        assert_eq!(wire_field_name("room_title"), "roomTitle");
        assert_eq!(wire_field_name("id_token"), "idToken");
        assert_eq!(wire_field_name("refresh_token"), "refreshToken");
        assert_eq!(wire_field_name("page"), "page");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
