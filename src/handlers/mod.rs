//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Android App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (JSON, camelCase)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 작성 규칙
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_room(
//!     payload: web::Json<RoomCreateRequest>,
//!     user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let service = RoomService::instance();
//!     let response = service.create_room(user.member_object_id()?, payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! - 요청 본문은 서비스 호출 전에 `validate()`로 검증합니다.
//! - 회원 ID는 항상 `AuthenticatedUser`에서 가져옵니다.
//! - 에러는 `AppError`로 반환하면 `ResponseError` 구현이 상태 코드와 JSON 본문을 만듭니다.
//!
//! ## 모듈
//!
//! - [`rooms`] - 방 생성/조회/참여/나가기/삭제
//! - [`auth`] - Google 로그인, 토큰 갱신
//! - [`members`] - 내 정보 조회

pub mod rooms;
pub mod auth;
pub mod members;
