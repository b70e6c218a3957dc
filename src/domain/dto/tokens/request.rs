use serde::Deserialize;

/// 리프레시 요청 본문
///
/// `Authorization: Bearer` 헤더가 없을 때만 사용됩니다.
#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
