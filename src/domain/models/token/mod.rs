//! JWT 인증 토큰 클레임 및 토큰 쌍
//!
//! 표준 클레임(`sub`, `iat`, `exp`, `jti`)에 회원 역할과 토큰 용도를 더해 발급합니다.
//! 리프레시 토큰을 액세스 토큰으로 쓰는 것을 막기 위해 `token_type`을 검사합니다.
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 회원 ID (ObjectId 16진수)
    pub sub: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
    /// 토큰 고유 ID
    pub jti: String,
}

/// 로그인/갱신 시 함께 발급되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}
