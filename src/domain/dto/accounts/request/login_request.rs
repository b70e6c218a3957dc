use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 DTO
///
/// `identifier`에는 사용자명 또는 이메일을 넣을 수 있습니다.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명 또는 이메일을 입력해주세요"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_both_fields() {
        let ok = LoginRequest { identifier: "alice".into(), password: "x".into() };
        assert!(ok.validate().is_ok());

        let missing_identifier = LoginRequest { identifier: "".into(), password: "x".into() };
        assert!(missing_identifier.validate().is_err());

        let missing_password = LoginRequest { identifier: "alice".into(), password: "".into() };
        assert!(missing_password.validate().is_err());
    }
}
