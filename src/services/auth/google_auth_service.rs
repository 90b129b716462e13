//! # Google ID 토큰 로그인 서비스
//!
//! Android 클라이언트가 Google Sign-In으로 받은 ID 토큰을 검증하고,
//! 회원을 찾거나 만든 뒤 서비스 JWT 토큰 쌍을 발급합니다.
//!
//! ## 로그인 흐름
//!
//! ```text
//! ┌─────────────┐          ┌─────────────────┐          ┌──────────────────┐
//! │ Android 앱   │          │   우리 서버       │          │ Google tokeninfo │
//! └─────────────┘          └─────────────────┘          └──────────────────┘
//!        │ POST /auth/google         │                            │
//!        │ { idToken }               │                            │
//!        ├──────────────────────────►│ GET ?id_token=...          │
//!        │                           ├───────────────────────────►│
//!        │                           │ 200 { iss, aud, sub, ... } │
//!        │                           │◄───────────────────────────┤
//!        │                           │ 클레임 검증                   │
//!        │                           │ 회원 조회/연결/생성             │
//!        │ 200 LoginResponse         │                            │
//!        │◄──────────────────────────┤                            │
//! ```
//!
//! ## 계정 연결 정책
//!
//! | 상황 | 처리 |
//! |------|------|
//! | Google ID로 가입된 회원 존재 | 로그인 |
//! | 같은 이메일의 회원 존재, Google 미연결 | Google ID 연결 후 로그인 |
//! | 같은 이메일의 회원이 다른 Google 계정에 연결됨 | 409 Conflict |
//! | 없음 | 신규 회원 생성 (`isNewMember: true`) |

use std::sync::Arc;
use chrono::Utc;
use singleton_macro::service;
use crate::{
    config::GoogleOAuthConfig,
    core::errors::AppError,
    domain::{
        dto::{
            auth::{
                request::{GoogleLoginRequest, RefreshTokenRequest},
                response::{LoginResponse, TokenResponse},
            },
            members::MemberResponse,
        },
        entities::members::Member,
        models::oauth::{GoogleIdTokenInfo, VerifiedGoogleAccount},
    },
    repositories::members::MemberRepository,
    services::auth::TokenService,
    utils::object_id::parse_object_id,
};

#[service(name = "googleauth")]
pub struct GoogleAuthService {
    member_repo: Arc<MemberRepository>,
    token_service: Arc<TokenService>,
}

impl GoogleAuthService {
    /// tokeninfo 엔드포인트로 ID 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - Google이 토큰을 거부했거나 클레임 불일치
    /// * `AppError::ExternalServiceError` - Google 통신 실패
    pub async fn verify_id_token(&self, id_token: &str) -> Result<VerifiedGoogleAccount, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(GoogleOAuthConfig::tokeninfo_uri())
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 검증 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            log::warn!("Google tokeninfo 거부: {}", response.status());
            return Err(AppError::AuthenticationError("유효하지 않은 Google ID 토큰입니다".to_string()));
        }

        let info = response
            .json::<GoogleIdTokenInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))?;

        info.verify(&GoogleOAuthConfig::client_ids(), Utc::now().timestamp())
    }

    /// Google ID 토큰 로그인
    pub async fn login(&self, request: GoogleLoginRequest) -> Result<LoginResponse, AppError> {
        let account = self.verify_id_token(&request.id_token).await?;
        let (member, is_new_member) = self.find_or_create_member(&account).await?;

        if !member.is_active {
            return Err(AppError::AuthorizationError("비활성화된 계정입니다".to_string()));
        }

        let tokens = self.token_service.generate_token_pair(&member)?;

        log::info!(
            "Google 로그인 성공: {} (신규: {})",
            member.email,
            is_new_member
        );

        Ok(LoginResponse::new(MemberResponse::from(member), tokens, is_new_member))
    }

    async fn find_or_create_member(&self, account: &VerifiedGoogleAccount) -> Result<(Member, bool), AppError> {
        if let Some(member) = self.member_repo.find_by_google_id(&account.google_id).await? {
            let member = self.record_login(member, None).await?;
            return Ok((member, false));
        }

        if let Some(member) = self.member_repo.find_by_email(&account.email).await? {
            if member.google_id.is_some() && !member.is_linked_to_google(&account.google_id) {
                return Err(AppError::ConflictError(
                    "이미 다른 Google 계정과 연결된 이메일입니다".to_string()
                ));
            }

            log::info!("기존 회원에 Google 계정 연결: {}", member.email);
            let member = self.record_login(member, Some(&account.google_id)).await?;
            return Ok((member, false));
        }

        let new_member = Member::new_google(
            account.email.clone(),
            account.nickname(),
            account.google_id.clone(),
            account.picture.clone(),
        );

        let member = self.member_repo.create(new_member).await?;
        Ok((member, true))
    }

    async fn record_login(&self, member: Member, link_google_id: Option<&str>) -> Result<Member, AppError> {
        let id = member.id.ok_or_else(|| AppError::InternalError("회원 ID가 없습니다".to_string()))?;

        Ok(self.member_repo
            .touch_last_login(&id, link_google_id)
            .await?
            .unwrap_or(member))
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    pub async fn refresh(&self, request: RefreshTokenRequest) -> Result<TokenResponse, AppError> {
        let claims = self.token_service.verify_refresh_token(&request.refresh_token)?;

        let member_id = parse_object_id(&claims.sub, "회원")
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

        let member = self.member_repo
            .find_by_id(&member_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("존재하지 않는 회원입니다".to_string()))?;

        if !member.is_active {
            return Err(AppError::AuthorizationError("비활성화된 계정입니다".to_string()));
        }

        let tokens = self.token_service.generate_token_pair(&member)?;
        Ok(TokenResponse::from(tokens))
    }
}
