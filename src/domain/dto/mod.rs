//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//! Spring의 `@RequestBody` / `@ResponseBody` 클래스와 같은 역할입니다.
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── rooms/
//! │   ├── request/   - RoomCreateRequest, RoomListQuery
//! │   └── response/  - RoomResponse, RoomPageResponse
//! ├── auth/
//! │   ├── request/   - GoogleLoginRequest, RefreshTokenRequest
//! │   └── response/  - LoginResponse, TokenResponse
//! └── members/       - MemberResponse
//! ```
//!
//! ## 직렬화 규칙
//!
//! 안드로이드 클라이언트와 맞추기 위해 JSON 필드는 camelCase를 사용합니다.
//! (`roomTitle`, `hasPassword`, `idToken` 등)
//!
//! ## 검증
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 핸들러가 서비스 호출 전에
//! `validate()`를 명시적으로 호출합니다. 실패 시 `AppError::InvalidField`로 변환됩니다.

pub mod rooms;
pub mod auth;
pub mod members;

pub use rooms::*;
pub use auth::*;
pub use members::*;
