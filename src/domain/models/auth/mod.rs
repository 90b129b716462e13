//! 요청 단위 인증 모델
//!
//! 인증 미들웨어가 JWT를 검증한 뒤 request extension에 넣는 회원 정보와
//! 라우트별 역할 요구 조건을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
