//! # 문자열 유틸리티
//!
//! 입력값 정리와 식별자 정규화에 사용하는 공통 함수들입니다.

use serde::Deserialize;

use crate::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거합니다.
///
/// # Errors
///
/// 공백을 제거한 결과가 빈 문자열이면 `AppError::MalformedInput`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let identifier = validate_required_string("  alice  ", "identifier")?;
/// assert_eq!(identifier, "alice");
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MalformedInput(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 사용자명 문자 규칙을 확인합니다.
///
/// 알파벳, 숫자, `_`, `-`만 허용하고 알파벳 또는 숫자가 하나 이상 있어야 합니다.
/// 실패 시 사용자에게 보여줄 메시지를 반환합니다.
pub fn check_username_chars(username: &str) -> Result<(), &'static str> {
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err("사용자명은 알파벳, 숫자, 언더스코어, 하이픈만 사용 가능합니다");
    }

    if !username.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err("사용자명은 알파벳 또는 숫자를 하나 이상 포함해야 합니다");
    }

    Ok(())
}

/// `@`를 포함한 식별자는 이메일로 취급합니다.
pub fn is_email_identifier(identifier: &str) -> bool {
    identifier.contains('@')
}

/// 이메일을 저장/비교용 형태로 정규화합니다 (공백 제거 + 소문자).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 로그인 식별자를 정규화합니다.
///
/// 사용자명은 `@`를 포함할 수 없으므로, `@`가 있으면 이메일로 간주하여
/// 소문자로 바꾸고 그렇지 않으면 공백만 제거합니다 (사용자명은 대소문자 구분).
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if is_email_identifier(trimmed) {
        normalize_email(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// 문자열 필드를 역직렬화하면서 앞뒤 공백을 제거합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(deserialize_with = "deserialize_trimmed_string")]
///     username: String,
/// }
/// ```
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
