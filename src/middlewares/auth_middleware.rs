//! JWT 인증 미들웨어
//!
//! 감싼 스코프의 모든 요청에 유효한 액세스 토큰을 요구합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 토큰만 검사하는 인증 미들웨어
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(
                roles.into_iter().map(str::to_string).collect()
            )),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{get, test, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::members::Member;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use super::*;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.member_id)
    }

    fn member_with_roles(roles: &[&str]) -> Member {
        let mut member = Member::new_google(
            "story@gmail.com".to_string(),
            "story".to_string(),
            "google-sub".to_string(),
            None,
        );
        member.id = Some(ObjectId::new());
        member.roles = roles.iter().map(|r| r.to_string()).collect();
        member
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test::init_service(
            App::new().wrap(AuthMiddleware::required()).service(whoami)
        ).await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let member = member_with_roles(&["user"]);
        let token = TokenService::instance().generate_access_token(&member).unwrap();

        let app = test::init_service(
            App::new().wrap(AuthMiddleware::required()).service(whoami)
        ).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, member.id_string().unwrap().as_bytes());
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_accepted() {
        let member = member_with_roles(&["user"]);
        let token = TokenService::instance().generate_refresh_token(&member).unwrap();

        let app = test::init_service(
            App::new().wrap(AuthMiddleware::required()).service(whoami)
        ).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_missing_role_is_forbidden() {
        let member = member_with_roles(&["guest"]);
        let token = TokenService::instance().generate_access_token(&member).unwrap();

        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
                .service(whoami)
        ).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }
}
