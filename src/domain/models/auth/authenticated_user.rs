use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::utils::object_id::parse_object_id;

/// JWT 토큰에서 추출된 회원 정보
///
/// 방 생성 시 호스트 ID는 항상 이 값에서 가져옵니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 회원 고유 ID (`sub` 클레임, ObjectId 16진수)
    pub member_id: String,

    /// 인증 프로바이더
    pub auth_provider: AuthProvider,

    /// 회원 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }

    /// 회원 ID를 `ObjectId`로 변환합니다.
    pub fn member_object_id(&self) -> Result<ObjectId, AppError> {
        parse_object_id(&self.member_id, "회원")
    }
}

/// 인증 미들웨어를 거친 요청에서 회원 정보를 꺼내는 추출자
///
/// 미들웨어가 적용되지 않은 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            member_id: ObjectId::new().to_hex(),
            auth_provider: AuthProvider::Google,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_authenticated_user_roles() {
        let admin = user(&["user", "admin"]);
        assert!(admin.has_role("admin"));
        assert!(admin.is_admin());
        assert!(admin.has_any_role(&["moderator", "admin"]));

        let member = user(&["user"]);
        assert!(!member.is_admin());
        assert!(!member.has_any_role(&["admin", "premium"]));
    }

    #[test]
    fn test_member_object_id() {
        let member = user(&["user"]);
        assert_eq!(member.member_object_id().unwrap().to_hex(), member.member_id);

        let broken = AuthenticatedUser { member_id: "nope".to_string(), ..member };
        assert!(broken.member_object_id().is_err());
    }

    #[actix_web::test]
    async fn test_extractor_reads_request_extensions() {
        let req = TestRequest::default().to_http_request();
        assert!(AuthenticatedUser::extract(&req).await.is_err());

        let expected = user(&["user"]);
        req.extensions_mut().insert(expected.clone());
        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted.member_id, expected.member_id);
    }
}
