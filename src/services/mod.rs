//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 방 생성, 조회, 참여, 나가기, 삭제
//! - Google ID 토큰 로그인과 JWT 토큰 발급
//! - 로그인한 회원 정보 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{rooms::RoomService, auth::TokenService};
//!
//! let room_service = RoomService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod rooms;
pub mod auth;
pub mod members;
