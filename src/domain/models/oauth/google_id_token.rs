//! # Google ID 토큰 정보 모델
//!
//! `https://oauth2.googleapis.com/tokeninfo?id_token=...` 응답을 표현합니다.
//! Google은 서명 검증을 마친 토큰에 대해서만 200을 반환하므로, 이 모듈은
//! 발급자(`iss`), 대상 클라이언트(`aud`), 만료(`exp`), 이메일 인증 여부만 확인합니다.
//!
//! tokeninfo는 숫자와 불리언도 문자열(`"exp": "1735689600"`, `"email_verified": "true"`)로
//! 내려주므로 두 형식을 모두 받아들입니다.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::config::GoogleOAuthConfig;
use crate::core::errors::AppError;

/// tokeninfo 응답
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIdTokenInfo {
    /// 발급자
    pub iss: String,

    /// 토큰을 요청한 OAuth 클라이언트 ID
    pub aud: String,

    /// Google 계정 고유 ID
    pub sub: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "bool_from_any")]
    pub email_verified: bool,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,

    /// 만료 시각 (Unix 초)
    #[serde(deserialize_with = "i64_from_any")]
    pub exp: i64,
}

/// 클레임 검증을 통과한 Google 계정
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedGoogleAccount {
    pub google_id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleIdTokenInfo {
    /// 클레임을 검증하고 계정 정보를 꺼냅니다.
    ///
    /// # Arguments
    ///
    /// * `allowed_audiences` - 허용할 OAuth 클라이언트 ID
    /// * `now` - 현재 시각 (Unix 초)
    ///
    /// # Errors
    ///
    /// 허용 클라이언트 ID가 하나도 설정되지 않았으면 어떤 토큰이든 거부합니다.
    pub fn verify(self, allowed_audiences: &[String], now: i64) -> Result<VerifiedGoogleAccount, AppError> {
        if !GoogleOAuthConfig::allowed_issuers().contains(&self.iss.as_str()) {
            return Err(AppError::AuthenticationError(
                format!("신뢰할 수 없는 토큰 발급자입니다: {}", self.iss)
            ));
        }

        if allowed_audiences.is_empty() {
            log::error!("GOOGLE_CLIENT_IDS가 비어 있어 Google 로그인을 거부합니다");
            return Err(AppError::AuthenticationError(
                "Google 로그인 클라이언트가 설정되지 않았습니다".to_string()
            ));
        }

        if !allowed_audiences.iter().any(|aud| aud == &self.aud) {
            return Err(AppError::AuthenticationError(
                "허용되지 않은 클라이언트의 토큰입니다".to_string()
            ));
        }

        if self.exp <= now {
            return Err(AppError::AuthenticationError("만료된 Google ID 토큰입니다".to_string()));
        }

        if self.sub.trim().is_empty() {
            return Err(AppError::AuthenticationError("Google 계정 식별자가 없습니다".to_string()));
        }

        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| AppError::AuthenticationError("이메일 정보가 없는 Google 계정입니다".to_string()))?;

        if !self.email_verified {
            return Err(AppError::AuthenticationError(
                "이메일 인증이 완료되지 않은 Google 계정입니다".to_string()
            ));
        }

        Ok(VerifiedGoogleAccount {
            google_id: self.sub,
            email,
            name: self.name,
            picture: self.picture,
        })
    }
}

impl VerifiedGoogleAccount {
    /// 회원 닉네임 후보
    ///
    /// Google 프로필 이름이 비어 있으면 이메일의 `@` 앞부분을 사용합니다.
    pub fn nickname(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}

fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom("exp is not an integer")),
        Value::String(s) => s.parse::<i64>().map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!("unexpected exp value: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_735_689_600;

    fn token_info(json: &str) -> GoogleIdTokenInfo {
        serde_json::from_str(json).unwrap()
    }

    fn valid_json() -> String {
        format!(
            r#"{{
                "iss": "https://accounts.google.com",
                "azp": "android-client",
                "aud": "web-client.apps.googleusercontent.com",
                "sub": "110169484474386276334",
                "email": "story@gmail.com",
                "email_verified": "true",
                "name": "스토리 컷",
                "picture": "https://lh3.googleusercontent.com/a/photo",
                "iat": "{}",
                "exp": "{}",
                "alg": "RS256",
                "kid": "abc"
            }}"#,
            NOW - 60,
            NOW + 3600
        )
    }

    fn audiences() -> Vec<String> {
        vec!["web-client.apps.googleusercontent.com".to_string()]
    }

    #[test]
    fn test_tokeninfo_string_fields_are_parsed() {
        let info = token_info(&valid_json());
        assert!(info.email_verified);
        assert_eq!(info.exp, NOW + 3600);
    }

    #[test]
    fn test_verify_returns_account() {
        let account = token_info(&valid_json()).verify(&audiences(), NOW).unwrap();

        assert_eq!(account.google_id, "110169484474386276334");
        assert_eq!(account.email, "story@gmail.com");
        assert_eq!(account.nickname(), "스토리 컷");
    }

    #[test]
    fn test_verify_rejects_foreign_audience() {
        let result = token_info(&valid_json()).verify(&["other-client".to_string()], NOW);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_when_client_ids_unconfigured() {
        let result = token_info(&valid_json()).verify(&[], NOW);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let result = token_info(&valid_json()).verify(&audiences(), NOW + 3600);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_unknown_issuer() {
        let json = valid_json().replace("https://accounts.google.com", "https://evil.example.com");
        let result = token_info(&json).verify(&audiences(), NOW);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_unverified_email() {
        let json = valid_json().replace(r#""email_verified": "true""#, r#""email_verified": false"#);
        let result = token_info(&json).verify(&audiences(), NOW);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_nickname_falls_back_to_email_local_part() {
        let account = VerifiedGoogleAccount {
            google_id: "1".to_string(),
            email: "cutter@gmail.com".to_string(),
            name: Some("   ".to_string()),
            picture: None,
        };
        assert_eq!(account.nickname(), "cutter");
    }
}
