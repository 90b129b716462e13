/// 라우트에 요구되는 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredRole {
    /// 회원 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["user".to_string(), "admin".to_string()]);

        assert!(required.is_satisfied(&["user".to_string()]));
        assert!(required.is_satisfied(&["admin".to_string()]));
        assert!(!required.is_satisfied(&["guest".to_string()]));
        assert!(!required.is_satisfied(&[]));
    }
}
