//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 합니다.
//!
//! ## 엔티티 관계
//!
//! ```text
//! Member 1 ──< RoomMember >── 1 Room
//!   │                            │
//!   └──────── host_member_id ────┘
//! ```
//!
//! - `Room`은 생성한 회원(`host_member_id`)을 가집니다
//! - 참여 인원은 `RoomMember` 컬렉션에서 따로 집계합니다 (Room 자체는 인원 수를 모릅니다)
//!
//! ## 공통 규칙
//!
//! - `_id`는 `Option<ObjectId>`로 두고, 저장 시점에 리포지토리가 채웁니다
//! - 생성/수정 시각은 BSON `DateTime`을 사용합니다
//! - 엔티티 간 참조는 직접 포함하지 않고 ID로만 표현합니다
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id @GeneratedValue` | `#[serde(rename = "_id")] Option<ObjectId>` |
//! | `@CreatedDate` / `@LastModifiedDate` | 리포지토리의 `create()`에서 설정 |
//! | `@ManyToOne` | `ObjectId` 필드 |

pub mod rooms;
pub mod members;
