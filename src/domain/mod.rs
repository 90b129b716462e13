//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 방(Room)과 회원(Member) 도메인의
//! 데이터 구조와 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 엔티티 (Room, RoomMember, Member)
//! ├── dto       - API 요청/응답 구조체 (RoomCreateRequest, RoomResponse, GoogleLoginRequest)
//! └── models    - 토큰 클레임, Google tokeninfo, 요청 단위 인증 정보
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! ## 방 생성 흐름
//!
//! ```rust,ignore
//! // 1. 요청 검증 (필드 단위 에러)
//! request.validate()?;
//!
//! // 2. 엔티티 변환 - 호스트 ID는 인증된 세션에서
//! let room = request.to_entity(user.member_object_id()?);
//!
//! // 3. 저장 (ID와 생성/수정 시각이 채워짐)
//! let saved = room_repo.create(room).await?;
//!
//! // 4. 참여 인원 수와 함께 응답 변환
//! let count = room_member_repo.count_by_room(&room_id).await?;
//! let response = RoomResponse::from(saved, count);
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 영속 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 |
//! | `@Valid` + `@Size` | `validator::Validate` + 명시적 `validate()` 호출 | 입력 검증 |
//! | `Entity.builder()` | 구조체 리터럴 / 생성자 함수 | 객체 생성 |

pub mod entities;
pub mod dto;
pub mod models;
