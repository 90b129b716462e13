//! # Configuration Module
//!
//! 스토리컷 백엔드의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, Rate Limit, CORS, 방(Room) 관련 설정
//! - [`auth_config`] - Google ID 토큰 검증, JWT 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig, RoomConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//!
//! let secret = JwtConfig::secret();
//! let page_size = RoomConfig::default_page_size();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export SERVER_HOST="0.0.0.0"
//! export SERVER_PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="storycut_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export GOOGLE_CLIENT_IDS="android-client-id.apps.googleusercontent.com"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 환경 변수에 따라 `main`에서 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
