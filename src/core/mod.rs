//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 에러 변환**: `validator` 결과를 필드 단위 에러로 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Service` | `#[service]` 매크로 |
//! | `@Repository` | `#[repository]` 매크로 |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[repository(name = "room", collection = "rooms")]
//! pub struct RoomRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "room")]
//! pub struct RoomService {
//!     room_repo: Arc<RoomRepository>,  // 자동 주입
//! }
//!
//! let room_service = RoomService::instance();
//! ```
//!
//! ## 트러블슈팅
//!
//! ```text
//! panic: No repository found for entity: roommember
//! ```
//! **해결**: 매크로의 `name` 인자가 타입 이름에서 접미사를 뗀 소문자와 같은지 확인합니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
