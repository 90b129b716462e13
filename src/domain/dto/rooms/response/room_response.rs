//! 방 응답 DTO
//!
//! 저장된 방과 별도로 집계한 참여 인원 수를 묶어 클라이언트에 보여주는 읽기 전용 뷰입니다.
//! 비밀번호 값은 어떤 필드로도 내보내지 않고 설정 여부(`hasPassword`)만 알려줍니다.
use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use crate::domain::entities::rooms::Room;

/// 방 응답
///
/// ```json
/// {
///   "roomId": "64f1a2b3c4d5e6f7a8b9c0d1",
///   "hostId": "64f1a2b3c4d5e6f7a8b9c0d2",
///   "roomTitle": "주말 브이로그 편집",
///   "hasPassword": true,
///   "createdAt": "2025-01-01T00:00:00Z",
///   "updatedAt": "2025-01-01T00:00:00Z",
///   "memberCount": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: String,
    pub host_id: String,
    pub room_title: String,
    pub has_password: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub member_count: u64,
}

impl RoomResponse {
    /// 방 엔티티와 참여 인원 수로 응답을 만듭니다.
    ///
    /// 인원 수는 `room_members` 컬렉션에서 따로 집계한 값을 받습니다.
    pub fn from(room: Room, member_count: u64) -> Self {
        let has_password = room.has_password();
        let Room {
            id,
            host_member_id,
            title,
            created_at,
            updated_at,
            ..
        } = room;

        Self {
            room_id: id.map(|id| id.to_hex()).unwrap_or_default(),
            host_id: host_member_id.to_hex(),
            room_title: title,
            has_password,
            created_at: created_at.and_then(to_chrono),
            updated_at: updated_at.and_then(to_chrono),
            member_count,
        }
    }
}

fn to_chrono(value: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
}

/// 방 목록 페이지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPageResponse {
    pub rooms: Vec<RoomResponse>,
    pub page: u32,
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn saved_room(password: Option<&str>) -> Room {
        let now = bson::DateTime::from_millis(1_735_689_600_000);
        Room {
            id: Some(ObjectId::new()),
            host_member_id: ObjectId::new(),
            title: "주말 브이로그 편집".to_string(),
            password: password.map(str::to_string),
            context: Some("컷 편집 같이 해요".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    #[test]
    fn test_has_password_follows_room_password() {
        assert!(!RoomResponse::from(saved_room(None), 1).has_password);
        assert!(!RoomResponse::from(saved_room(Some("")), 1).has_password);
        assert!(RoomResponse::from(saved_room(Some("abc")), 1).has_password);
    }

    #[test]
    fn test_projection_copies_identity_and_count() {
        let room = saved_room(None);
        let room_id = room.id.unwrap().to_hex();
        let host_id = room.host_member_id.to_hex();

        let response = RoomResponse::from(room, 7);

        assert_eq!(response.room_id, room_id);
        assert_eq!(response.host_id, host_id);
        assert_eq!(response.room_title, "주말 브이로그 편집");
        assert_eq!(response.member_count, 7);
        assert_eq!(
            response.created_at.map(|t| t.timestamp_millis()),
            Some(1_735_689_600_000)
        );
    }

    #[test]
    fn test_password_is_never_serialized() {
        let secret = "super-secret-방비번";
        let response = RoomResponse::from(saved_room(Some(secret)), 2);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains(secret));
        assert!(!json.to_lowercase().contains("\"password\""));
        assert!(!json.contains("roomPassword"));
        assert!(json.contains("\"hasPassword\":true"));
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let value = serde_json::to_value(RoomResponse::from(saved_room(None), 1)).unwrap();
        let object = value.as_object().unwrap();

        for key in ["roomId", "hostId", "roomTitle", "hasPassword", "createdAt", "updatedAt", "memberCount"] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 7);
    }
}
