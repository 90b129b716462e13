use serde::Deserialize;
use validator::Validate;
use crate::config::RoomConfig;

/// 방 목록 조회 쿼리 (`?page=1&size=20`)
///
/// `page`는 1부터 시작합니다. `size`는 설정된 최대값으로 잘립니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoomListQuery {
    #[validate(range(min = 1, message = "페이지는 1 이상이어야 합니다"))]
    pub page: Option<u32>,

    pub size: Option<u32>,
}

impl RoomListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn size(&self) -> u32 {
        RoomConfig::clamp_page_size(self.size)
    }

    /// 건너뛸 문서 수
    pub fn skip(&self) -> u64 {
        u64::from(self.page() - 1) * u64::from(self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_rejected() {
        let query = RoomListQuery { page: Some(0), size: None };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_skip_is_computed_from_page_and_size() {
        let query = RoomListQuery { page: Some(3), size: Some(10) };
        assert!(query.validate().is_ok());
        assert_eq!(query.page(), 3);
        assert_eq!(query.skip(), 20);

        let first = RoomListQuery::default();
        assert_eq!(first.page(), 1);
        assert_eq!(first.skip(), 0);
    }
}
