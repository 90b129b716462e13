//! Member Entity Implementation
//!
//! 방을 만들고 참여하는 서비스 회원입니다.
//! Google 계정의 고유 식별자(`sub`)와 이메일로 기존 회원을 찾습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 회원 엔티티 (`members` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (unique)
    pub email: String,
    /// 화면에 표시되는 이름
    pub nickname: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub auth_provider: AuthProvider,
    /// Google 계정 식별자 (`sub` 클레임)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub roles: Vec<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Member {
    /// Google 계정으로 새 회원을 생성합니다.
    ///
    /// 기본 역할은 `user`이며, 저장 전이므로 `id`는 비어 있습니다.
    pub fn new_google(
        email: String,
        nickname: String,
        google_id: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            profile_image_url,
            auth_provider: AuthProvider::Google,
            google_id: Some(google_id),
            roles: vec!["user".to_string()],
            is_active: true,
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_linked_to_google(&self, google_id: &str) -> bool {
        self.google_id.as_deref() == Some(google_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_google_member_defaults() {
        let member = Member::new_google(
            "story@gmail.com".to_string(),
            "story".to_string(),
            "1234567890".to_string(),
            None,
        );

        assert!(member.id.is_none());
        assert_eq!(member.auth_provider, AuthProvider::Google);
        assert_eq!(member.roles, vec!["user".to_string()]);
        assert!(member.is_active);
        assert!(member.is_linked_to_google("1234567890"));
        assert!(!member.is_linked_to_google("other"));
        assert!(member.last_login_at.is_some());
    }
}
