//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급과 검증을 담당합니다.
//! 두 토큰은 같은 비밀키(HS256)로 서명되며 `token_type` 클레임으로 구분됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::members::Member,
    domain::models::token::{TokenClaims, TokenPair, TokenType},
};

/// JWT 토큰 관리 서비스
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 회원을 위한 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은(ID 없는) 회원이거나 서명 실패
    pub fn generate_access_token(&self, member: &Member) -> Result<String, AppError> {
        self.issue(member, TokenType::Access, Duration::hours(JwtConfig::expiration_hours()))
    }

    pub fn generate_refresh_token(&self, member: &Member) -> Result<String, AppError> {
        self.issue(member, TokenType::Refresh, Duration::days(JwtConfig::refresh_expiration_days()))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// ```rust,ignore
    /// let tokens = token_service.generate_token_pair(&member)?;
    /// println!("Expires in: {} seconds", tokens.expires_in);
    /// ```
    pub fn generate_token_pair(&self, member: &Member) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(member)?,
            refresh_token: self.generate_refresh_token(member)?,
            expires_in: JwtConfig::expiration_hours() * 3600,
        })
    }

    fn issue(&self, member: &Member, token_type: TokenType, lifetime: Duration) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: member.id_string().ok_or_else(|| {
                AppError::InternalError("회원 ID가 없습니다".to_string())
            })?,
            auth_provider: member.auth_provider.clone(),
            roles: member.roles.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let encoding_key = EncodingKey::from_secret(JwtConfig::secret().as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시각을 검증하고 클레임을 꺼냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 형식 또는 서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(JwtConfig::secret().as_ref());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    /// API 요청용 토큰 검증 (리프레시 토큰 거부)
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::AuthenticationError("액세스 토큰이 아닙니다".to_string()));
        }
        Ok(claims)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::AuthenticationError("리프레시 토큰이 아닙니다".to_string()));
        }
        Ok(claims)
    }

    /// `Authorization: Bearer {token}` 헤더 값에서 토큰 부분만 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
