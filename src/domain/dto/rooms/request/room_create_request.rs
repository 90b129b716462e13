//! 방 생성 요청 DTO
//!
//! 클라이언트가 보낸 방 제목, 비밀번호, 설명을 담습니다.
//! 호스트 회원 ID는 요청 본문이 아니라 인증된 세션에서 받습니다.
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::rooms::Room;

/// 방 제목 길이 제약 위반 시 사용자에게 보여줄 메시지
pub const ROOM_TITLE_LENGTH_MESSAGE: &str = "방 제목은 2자 이상 100자 이하여야 합니다.";

/// 방 생성 요청
///
/// ```json
/// { "roomTitle": "주말 브이로그 편집", "roomPassword": "1234", "roomContext": "컷 편집 같이 해요" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreateRequest {
    /// 방 제목 (2-100자, 문자 단위)
    #[validate(length(min = 2, max = 100, message = "방 제목은 2자 이상 100자 이하여야 합니다."))]
    pub room_title: String,

    /// 입장 비밀번호
    #[serde(default)]
    pub room_password: Option<String>,

    /// 방 설명
    #[serde(default)]
    pub room_context: Option<String>,
}

impl RoomCreateRequest {
    /// 저장할 방 엔티티로 변환합니다.
    ///
    /// 필드를 그대로 복사하며 `id`와 생성/수정 시각은 비워 둡니다.
    /// 검증은 이 함수를 호출하기 전에 끝나 있어야 합니다.
    pub fn to_entity(self, host_member_id: ObjectId) -> Room {
        Room {
            id: None,
            host_member_id,
            title: self.room_title,
            password: self.room_password,
            context: self.room_context,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn request_with_title(title: String) -> RoomCreateRequest {
        RoomCreateRequest {
            room_title: title,
            room_password: None,
            room_context: None,
        }
    }

    fn assert_title_rejected(title: String) {
        let error: AppError = request_with_title(title).validate().unwrap_err().into();
        match error {
            AppError::InvalidField { field, message } => {
                assert_eq!(field, "roomTitle");
                assert_eq!(message, ROOM_TITLE_LENGTH_MESSAGE);
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_title_length_one_is_rejected() {
        assert_title_rejected("a".to_string());
    }

    #[test]
    fn test_title_length_two_is_accepted() {
        assert!(request_with_title("ab".to_string()).validate().is_ok());
    }

    #[test]
    fn test_title_length_hundred_is_accepted() {
        assert!(request_with_title("a".repeat(100)).validate().is_ok());
    }

    #[test]
    fn test_title_length_hundred_one_is_rejected() {
        assert_title_rejected("a".repeat(101));
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        assert!(request_with_title("방".repeat(100)).validate().is_ok());
        assert_title_rejected("방".to_string());
        assert_title_rejected("방".repeat(101));
    }

    #[test]
    fn test_to_entity_copies_fields_and_uses_given_host() {
        let host = ObjectId::new();
        let request = RoomCreateRequest {
            room_title: "  편집방 ✂️ ".to_string(),
            room_password: Some("p@ss word".to_string()),
            room_context: Some("설명\n두 줄".to_string()),
        };

        let room = request.clone().to_entity(host);

        assert_eq!(room.title, request.room_title);
        assert_eq!(room.password, request.room_password);
        assert_eq!(room.context, request.room_context);
        assert_eq!(room.host_member_id, host);
        assert!(room.id.is_none());
        assert!(room.created_at.is_none());
        assert!(room.updated_at.is_none());
    }

    #[test]
    fn test_host_id_in_body_is_ignored() {
        let json = r#"{
            "roomTitle": "방 제목",
            "roomPassword": null,
            "hostId": "64f1a2b3c4d5e6f7a8b9c0d1",
            "hostMemberId": "64f1a2b3c4d5e6f7a8b9c0d1"
        }"#;
        let request: RoomCreateRequest = serde_json::from_str(json).unwrap();
        let host = ObjectId::new();

        let room = request.to_entity(host);

        assert_eq!(room.host_member_id, host);
        assert!(room.password.is_none());
        assert!(room.context.is_none());
    }
}
