//! 인증 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::dto::members::MemberResponse;
use crate::domain::models::token::TokenPair;

/// Google 로그인 응답
///
/// 처음 로그인한 회원이면 `isNewMember`가 `true`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub member: MemberResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
    pub is_new_member: bool,
}

impl LoginResponse {
    pub fn new(member: MemberResponse, tokens: TokenPair, is_new_member: bool) -> Self {
        Self {
            member,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
            is_new_member,
        }
    }
}

/// 토큰 갱신 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
        }
    }
}
