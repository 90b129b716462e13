//! # Authentication Configuration Module
//!
//! Google ID 토큰 검증, JWT 토큰 발급 등 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 OAuth2 Resource Server 및 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 인증 흐름
//!
//! 1. 안드로이드 앱이 Google Sign-In으로 ID 토큰을 발급받습니다
//! 2. 백엔드가 Google tokeninfo 엔드포인트로 ID 토큰을 검증합니다
//! 3. 검증된 계정으로 회원을 찾거나 생성하고 JWT 토큰 쌍을 발급합니다
//!
//! ## Spring Security 와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `spring.security.oauth2.resourceserver.jwt.audiences` | `GoogleOAuthConfig::client_ids()` |
//! | `jwt.secret` | `JwtConfig::secret()` |
//! | `spring.security.oauth2.client.provider` | `AuthProvider` |
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_IDS="android-id.apps.googleusercontent.com,web-id.apps.googleusercontent.com"
//! export GOOGLE_TOKENINFO_URI="https://oauth2.googleapis.com/tokeninfo"
//!
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::config::data_config::split_csv;

/// Google ID 토큰 검증 설정
///
/// 안드로이드 앱과 웹 클라이언트가 서로 다른 OAuth 클라이언트 ID를 사용하므로
/// 허용할 `aud` 값을 여러 개 설정할 수 있습니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// 허용할 OAuth 클라이언트 ID 목록 (`GOOGLE_CLIENT_IDS`, 쉼표 구분)
    ///
    /// 비어 있으면 경고 로그를 남기며, 이 경우 모든 Google 로그인이 거부됩니다.
    pub fn client_ids() -> Vec<String> {
        let ids = env::var("GOOGLE_CLIENT_IDS")
            .map(|v| split_csv(&v))
            .unwrap_or_default();

        if ids.is_empty() {
            log::warn!("GOOGLE_CLIENT_IDS not set, every Google login will be rejected");
        }

        ids
    }

    pub fn tokeninfo_uri() -> String {
        env::var("GOOGLE_TOKENINFO_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string())
    }

    /// Google이 발급한 ID 토큰의 `iss` 값
    pub fn allowed_issuers() -> &'static [&'static str] {
        &["accounts.google.com", "https://accounts.google.com"]
    }
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "storycut-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// 회원 계정의 인증 제공자
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google ID 토큰으로 가입한 계정
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!("google".parse::<AuthProvider>().unwrap(), AuthProvider::Google);

        // 대소문자 무관
        assert_eq!("GOOGLE".parse::<AuthProvider>().unwrap(), AuthProvider::Google);

        assert!("local".parse::<AuthProvider>().is_err());
        assert!("github".parse::<AuthProvider>().is_err());
        assert!("unknown".parse::<AuthProvider>().is_err());
    }

    #[test]
    fn test_auth_provider_serializes_lowercase() {
        let json = serde_json::to_string(&AuthProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");

        let provider: AuthProvider = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(provider, AuthProvider::Google);
        assert_eq!(provider.to_string(), "google");
        assert!(serde_json::from_str::<AuthProvider>("\"local\"").is_err());
    }

    #[test]
    fn test_google_issuers() {
        let issuers = GoogleOAuthConfig::allowed_issuers();
        assert!(issuers.contains(&"accounts.google.com"));
        assert!(issuers.contains(&"https://accounts.google.com"));
    }
}
