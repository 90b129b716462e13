//! 인증 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 안드로이드 앱에서 전송하는 Google 로그인 요청
///
/// `idToken`은 Google Sign-In이 발급한 불투명한 문자열이며,
/// 검증과 만료 확인은 `GoogleAuthService`가 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1, message = "ID 토큰이 필요합니다"))]
    pub id_token: String,
}

/// 토큰 갱신 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_login_request_reads_camel_case() {
        let request: GoogleLoginRequest =
            serde_json::from_str(r#"{"idToken":"eyJhbGciOiJSUzI1NiJ9.payload.sig"}"#).unwrap();
        assert_eq!(request.id_token, "eyJhbGciOiJSUzI1NiJ9.payload.sig");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_id_token_is_rejected() {
        let request = GoogleLoginRequest { id_token: String::new() };
        assert!(request.validate().is_err());
    }
}
