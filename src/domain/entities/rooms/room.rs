//! Room Entity Implementation
//!
//! 호스트 회원이 만든 협업 방을 표현합니다.
//! 비밀번호는 선택 사항이며, 응답에서는 설정 여부만 노출됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 방 엔티티 (`rooms` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 방을 만든 회원 ID (생성 후 변경되지 않음)
    pub host_member_id: ObjectId,
    /// 방 제목
    pub title: String,
    /// 입장 비밀번호 (없으면 공개 방)
    #[serde(default)]
    pub password: Option<String>,
    /// 방 설명
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Room {
    /// 비밀번호가 설정되어 있는지 확인합니다.
    ///
    /// `None`과 빈 문자열은 모두 비밀번호가 없는 것으로 봅니다.
    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_hosted_by(&self, member_id: &ObjectId) -> bool {
        &self.host_member_id == member_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with_password(password: Option<&str>) -> Room {
        Room {
            id: None,
            host_member_id: ObjectId::new(),
            title: "스토리컷 회의".to_string(),
            password: password.map(str::to_string),
            context: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_has_password() {
        assert!(!room_with_password(None).has_password());
        assert!(!room_with_password(Some("")).has_password());
        assert!(room_with_password(Some("abc")).has_password());
        assert!(room_with_password(Some(" ")).has_password());
    }

    #[test]
    fn test_is_hosted_by() {
        let room = room_with_password(None);
        assert!(room.is_hosted_by(&room.host_member_id.clone()));
        assert!(!room.is_hosted_by(&ObjectId::new()));
    }

    #[test]
    fn test_unsaved_room_omits_id_and_timestamps() {
        let room = room_with_password(Some("abc"));
        let doc = mongodb::bson::to_document(&room).unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("created_at"));
        assert!(doc.contains_key("host_member_id"));
        assert_eq!(room.id_string(), None);
    }
}
