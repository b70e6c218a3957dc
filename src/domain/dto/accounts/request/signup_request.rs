use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::PasswordConfig;
use crate::utils::string_utils::{check_username_chars, deserialize_trimmed_string};

/// 회원가입 요청 DTO
///
/// `username`과 `email`은 역직렬화 시 앞뒤 공백이 제거됩니다.
/// 패스워드는 있는 그대로 해싱되며, 글자 수와 별개로 UTF-8 기준 72바이트를 넘을 수 없습니다.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(
        min = 3,
        max = 50,
        message = "사용자명은 3-50자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 8,
        max = 100,
        message = "비밀번호는 8-100자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    check_username_chars(username)
        .map_err(|message| ValidationError::new("invalid_username").with_message(message.into()))
}

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > PasswordConfig::MAX_SECRET_BYTES {
        return Err(ValidationError::new("password_too_long").with_message(
            format!("비밀번호는 {}바이트 이하여야 합니다", PasswordConfig::MAX_SECRET_BYTES).into(),
        ));
    }

    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
