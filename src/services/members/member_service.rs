use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::members::MemberResponse,
    repositories::members::MemberRepository,
    utils::object_id::parse_object_id,
};

/// 회원 조회 서비스
#[service(name = "member")]
pub struct MemberService {
    member_repo: Arc<MemberRepository>,
}

impl MemberService {
    /// 로그인한 회원 정보
    ///
    /// 토큰은 유효하지만 회원 문서가 삭제된 경우 `NotFound`.
    pub async fn get_me(&self, member_id: &str) -> Result<MemberResponse, AppError> {
        let object_id = parse_object_id(member_id, "회원")?;

        let member = self.member_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberResponse::from(member))
    }
}
