//! 스토리컷 백엔드
//!
//! 영상 편집 협업 앱의 방(Room) 관리 API 서버입니다.
//! Google ID 토큰 로그인, JWT 기반 인증, 방 생성/조회/참여 기능을 제공하며
//! 싱글톤 매크로를 활용한 의존성 주입으로 계층을 연결합니다.
//!
//! # Features
//!
//! - **방 관리**: 생성, 목록, 상세 조회, 참여, 나가기, 삭제
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **Google 로그인**: 안드로이드 앱의 ID 토큰 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 방, 참여 정보, 회원 저장
//! - **Redis**: 방/회원 단건 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use storycut_backend::services::rooms::RoomService;
//!
//! let room_service = RoomService::instance();
//! let room = room_service.create_room(host_member_id, request).await?;
//! println!("{} ({}명)", room.room_title, room.member_count);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
