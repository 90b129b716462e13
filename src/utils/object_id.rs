//! # ObjectId 변환 유틸리티
//!
//! 경로 파라미터나 JWT `sub` 로 전달된 16진수 문자열을 `ObjectId`로 바꿉니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 16진수 문자열을 `ObjectId`로 변환합니다.
///
/// # 인자
/// * `id` - 24자리 16진수 문자열
/// * `label` - 에러 메시지에 표시할 ID 이름 (예: "방", "회원")
///
/// # 예제
/// ```rust,ignore
/// let room_id = parse_object_id(&path_id, "방")?;
/// ```
pub fn parse_object_id(id: &str, label: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 {} ID 형식입니다: {}", label, id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex(), "방").unwrap(), oid);
    }

    #[test]
    fn test_parse_invalid_object_id() {
        match parse_object_id("not-an-id", "방") {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("방 ID")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
