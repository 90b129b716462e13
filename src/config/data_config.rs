//! 서버 및 데이터 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, Rate Limit, CORS, 방 목록 페이지네이션 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// if Environment::current().is_production() {
    ///     log::info!("프로덕션 모드로 실행합니다");
    /// }
    /// ```
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::from_name(&value)
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn host() -> String {
        env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn port() -> u16 {
        env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 워커 스레드 수 (0 이하로 설정하면 기본값 4를 사용)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// `actix-governor`에 전달되는 초당 요청 수와 버스트 크기입니다.
/// 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
pub struct RateLimitConfig;

impl RateLimitConfig {
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            })
    }

    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            })
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분) 값을 반환합니다.
    ///
    /// 설정되지 않은 경우 로컬 개발용 Origin 목록을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => split_csv(&value),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

/// 방(Room) 목록 및 캐시 설정
pub struct RoomConfig;

impl RoomConfig {
    pub fn default_page_size() -> u32 {
        env::var("ROOM_PAGE_SIZE_DEFAULT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20)
    }

    pub fn max_page_size() -> u32 {
        env::var("ROOM_PAGE_SIZE_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100)
    }

    /// Redis에 캐시된 방 문서의 만료 시간 (초)
    pub fn cache_ttl_seconds() -> usize {
        env::var("ROOM_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600)
    }

    /// 요청된 페이지 크기를 `1..=max` 범위로 보정합니다.
    pub fn clamp_page_size(requested: Option<u32>) -> u32 {
        let size = requested.unwrap_or_else(Self::default_page_size);
        size.clamp(1, Self::max_page_size().max(1))
    }
}

/// 쉼표로 구분된 값을 공백 제거 후 나눕니다. 빈 항목은 버립니다.
pub(crate) fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
        assert!(Environment::from_name("prod").is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("SERVER_PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("SERVER_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_clamp_page_size() {
        if env::var("ROOM_PAGE_SIZE_MAX").is_err() && env::var("ROOM_PAGE_SIZE_DEFAULT").is_err() {
            assert_eq!(RoomConfig::clamp_page_size(None), 20);
            assert_eq!(RoomConfig::clamp_page_size(Some(0)), 1);
            assert_eq!(RoomConfig::clamp_page_size(Some(50)), 50);
            assert_eq!(RoomConfig::clamp_page_size(Some(1000)), 100);
        }
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(
            split_csv(" a.apps.googleusercontent.com , ,b "),
            vec!["a.apps.googleusercontent.com".to_string(), "b".to_string()]
        );
        assert!(split_csv("").is_empty());
    }
}
