use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 방 참여 정보 (`room_members` 컬렉션)
///
/// `(room_id, member_id)` 쌍은 유일 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMember {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub room_id: ObjectId,
    pub member_id: ObjectId,
    pub joined_at: DateTime,
}

impl RoomMember {
    pub fn new(room_id: ObjectId, member_id: ObjectId) -> Self {
        Self {
            id: None,
            room_id,
            member_id,
            joined_at: DateTime::now(),
        }
    }
}
