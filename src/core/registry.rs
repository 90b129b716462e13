//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]`, `#[repository]` 매크로가 생성하는 등록 정보를 모아
//! 타입 기반으로 싱글톤 인스턴스를 찾아주는 전역 컨테이너입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Service` | `#[service]` | 비즈니스 로직 컴포넌트 |
//! | `@Repository` | `#[repository]` | 데이터 액세스 컴포넌트 |
//! | `@Autowired` | `Arc<T>` 필드 | 자동 의존성 주입 |
//! | `BeanCurrentlyInCreationException` | 순환 참조 패닉 | 시작 시점에 조기 발견 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service] 매크로 → ServiceRegistration 생성
//!    ├─ #[repository] 매크로 → RepositoryRegistration 생성
//!    └─ inventory::submit! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화 (main)
//!    ├─ Database, RedisClient → ServiceLocator::set()
//!    └─ ServiceLocator::initialize_all() → 리포지토리, 서비스 순서로 생성
//!
//! 3. 의존성 주입
//!    ├─ Arc<T> 필드 → ServiceLocator::get::<T>()
//!    ├─ 타입 이름에서 등록 이름 추론 (RoomRepository → "room")
//!    └─ 생성된 인스턴스를 TypeId 기준으로 캐싱
//! ```
//!
//! ## 이름 규칙
//!
//! `ServiceLocator::get::<T>()`는 타입 이름의 접미사를 떼고 소문자로 바꾼 값으로
//! 등록 정보를 찾습니다. 따라서 매크로의 `name` 인자는 타입 이름과 맞아야 합니다.
//!
//! ```rust,ignore
//! #[repository(name = "roommember", collection = "room_members")]
//! pub struct RoomMemberRepository { db: Arc<Database> }
//!
//! #[service(name = "googleauth")]
//! pub struct GoogleAuthService { member_repo: Arc<MemberRepository> }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// `#[service]` 매크로가 구현하는 서비스 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 리포지토리 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// `room_repository` → `room`, `googleauth_service` → `googleauth`
fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 이름(`RoomMemberRepository`)에서 조회 키(`roommember`)를 만듭니다.
fn lookup_key(clean_type_name: &str, suffix: &str) -> String {
    clean_type_name
        .strip_suffix(suffix)
        .unwrap_or(clean_type_name)
        .to_lowercase()
}

/// 생성 중인 타입 표시를 해제하는 가드
///
/// 생성자가 패닉으로 빠져나가도 표시가 남지 않습니다.
struct InitializingGuard(TypeId);

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        if let Ok(mut initializing) = LOCATOR.initializing.write() {
            initializing.remove(&self.0);
        }
    }
}

/// 전역 의존성 주입 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// 처음 요청된 타입은 등록된 생성자로 만들어 캐싱합니다.
    /// 생성자는 락을 잡지 않은 상태에서 실행되므로 생성 도중 다른 의존성을
    /// 다시 조회할 수 있습니다.
    ///
    /// # Panics
    ///
    /// - 등록되지 않은 타입을 요청한 경우
    /// - 순환 참조가 감지된 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().expect("ServiceLocator lock poisoned");
            if !initializing.insert(type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        let _guard = InitializingGuard(type_id);

        let instance = Self::construct::<T>(type_name);

        let mut instances = LOCATOR.instances.write().expect("ServiceLocator lock poisoned");
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().expect("Type mismatch in ServiceLocator")
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().expect("ServiceLocator lock poisoned");
        instances
            .get(&type_id)
            .map(|instance| instance.clone().downcast::<T>().expect("Type mismatch in ServiceLocator"))
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let (registration_name, boxed_instance) = if clean_type_name.contains("Repository") {
            let key = lookup_key(&clean_type_name, "Repository");
            let registration = REPOSITORY_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", key));
            (registration.name, (registration.constructor)())
        } else if clean_type_name.contains("Service") {
            let key = lookup_key(&clean_type_name, "Service");
            let registration = SERVICE_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No service found for entity: {}", key));
            (registration.name, (registration.constructor)())
        } else {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            );
        };

        match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => *arc_instance,
            Err(_) => panic!("Type mismatch for registration: {}", registration_name),
        }
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 매크로로 만들 수 없는 인프라 컴포넌트(Database, RedisClient)를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().expect("ServiceLocator lock poisoned");
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만들어 서비스 생성 시 의존성이 준비되어 있도록 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
