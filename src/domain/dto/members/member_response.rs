use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::AuthProvider;
use crate::domain::entities::members::Member;

/// 회원 정보 응답 (내부 식별자인 `google_id`는 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let Member {
            id,
            email,
            nickname,
            profile_image_url,
            auth_provider,
            roles,
            last_login_at,
            created_at,
            ..
        } = member;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            nickname,
            profile_image_url,
            auth_provider,
            roles,
            last_login_at,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_member_response_hides_google_id() {
        let mut member = Member::new_google(
            "story@gmail.com".to_string(),
            "story".to_string(),
            "google-sub-123".to_string(),
            Some("https://lh3.googleusercontent.com/a/photo".to_string()),
        );
        let oid = ObjectId::new();
        member.id = Some(oid);

        let response = MemberResponse::from(member);
        assert_eq!(response.id, oid.to_hex());

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("google-sub-123"));
        assert!(json.contains("\"profileImageUrl\""));
    }
}
