//! 토큰 인코딩/디코딩
//!
//! 클레임 셋을 HS256으로 서명된 3-파트 토큰 문자열로 만들고, 다시 검증합니다.
//! 서버 측 세션 저장소 없이 서명과 만료 시각만으로 유효성을 판단합니다.
//!
//! ## 디코딩 순서
//!
//! 1. 헤더 파싱 및 알고리즘 확인 (HS256 이외 거부)
//! 2. 서명 검증 (실패 시 어떤 클레임도 신뢰하지 않음)
//! 3. 클레임 역직렬화
//! 4. 만료 확인 (`now >= exp` 이면 만료)
//!
//! 1-3 단계의 모든 실패는 `AppError::InvalidSignature`로, 4단계는 `AppError::Expired`로 반환됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::AuthConfig;
use crate::domain::entities::Account;
use crate::domain::models::{ClaimSet, TokenKind};
use crate::errors::{AppError, AppResult, ErrorContext};

/// 서명 키를 보관하는 토큰 코덱
///
/// 키는 생성 시 한 번 만들어지고 이후 변경되지 않습니다.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(signing_key: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 경계값(now >= exp)을 정확히 적용하기 위해 직접 확인
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.as_bytes()),
            validation,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.signing_key())
    }

    /// 클레임 셋을 서명된 토큰으로 인코딩합니다.
    pub fn encode(&self, claims: &ClaimSet) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).context("토큰 생성 실패")
    }

    /// 현재 시각 기준으로 계정의 토큰을 발급합니다.
    ///
    /// `ttl`이 0 이하이면 발급 즉시 만료된 토큰이 만들어집니다.
    pub fn issue(&self, account: &Account, kind: TokenKind, ttl: Duration) -> AppResult<String> {
        let claims = ClaimSet::for_account(account, kind, Utc::now(), ttl);
        self.encode(&claims)
    }

    /// 토큰을 검증하고 클레임 셋을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidSignature` - 서명 불일치, 구조 손상, 허용되지 않은 알고리즘, 클레임 형식 오류
    /// * `AppError::Expired` - 서명은 유효하지만 만료 시각이 지남
    pub fn decode(&self, token: &str) -> AppResult<ClaimSet> {
        let claims = decode::<ClaimSet>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                AppError::InvalidSignature
            })?;

        if claims.is_expired_at(Utc::now()) {
            return Err(AppError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-signing-key-0123456789abcdef";

    fn account() -> Account {
        Account::new_local("alice".into(), "alice@example.com".into(), "hash".into())
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(KEY)
    }

    /// 위치 `index`의 문자를 다른 base64url 문자로 바꿉니다.
    fn replace_char_at(token: &str, index: usize) -> String {
        token
            .char_indices()
            .map(|(i, c)| {
                if i != index {
                    c
                } else if c == 'A' {
                    'B'
                } else {
                    'A'
                }
            })
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let codec = codec();
        let account = account();
        let claims = ClaimSet::for_account(&account, TokenKind::Access, Utc::now(), Duration::minutes(30));

        let token = codec.encode(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(decoded.exp - decoded.iat, 30 * 60);

        // 같은 토큰을 두 번 디코딩해도 결과가 같음
        assert_eq!(codec.decode(&token).unwrap(), decoded);
    }

    #[test]
    fn test_issue_twice_gives_distinct_valid_tokens() {
        let codec = codec();
        let account = account();

        let first = codec.issue(&account, TokenKind::Access, Duration::minutes(5)).unwrap();
        let second = codec.issue(&account, TokenKind::Access, Duration::minutes(5)).unwrap();

        assert_ne!(first, second);
        assert!(codec.decode(&first).is_ok());
        assert!(codec.decode(&second).is_ok());
    }

    #[test]
    fn test_every_single_character_change_is_rejected() {
        let codec = codec();
        let token = codec.issue(&account(), TokenKind::Refresh, Duration::minutes(5)).unwrap();

        for index in 0..token.len() {
            let tampered = replace_char_at(&token, index);
            assert_eq!(
                codec.decode(&tampered).unwrap_err(),
                AppError::InvalidSignature,
                "position {} was accepted",
                index
            );
        }
    }

    #[test]
    fn test_spliced_kind_is_rejected() {
        let codec = codec();
        let account = account();
        let access = codec.issue(&account, TokenKind::Access, Duration::minutes(5)).unwrap();
        let refresh = codec.issue(&account, TokenKind::Refresh, Duration::minutes(5)).unwrap();

        let access_parts: Vec<&str> = access.split('.').collect();
        let refresh_parts: Vec<&str> = refresh.split('.').collect();

        // refresh 클레임 + access 서명
        let forged = format!("{}.{}.{}", access_parts[0], refresh_parts[1], access_parts[2]);
        assert_eq!(codec.decode(&forged).unwrap_err(), AppError::InvalidSignature);
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let token = codec().issue(&account(), TokenKind::Access, Duration::minutes(5)).unwrap();
        let other = TokenCodec::new("another-signing-key-0123456789abcd");

        assert_eq!(other.decode(&token).unwrap_err(), AppError::InvalidSignature);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let codec = codec();

        for input in ["", "abc", "a.b", "a.b.c", "..", "Bearer x.y.z"] {
            assert_eq!(codec.decode(input).unwrap_err(), AppError::InvalidSignature);
        }
    }

    #[test]
    fn test_unsigned_token_is_rejected() {
        let codec = codec();
        let valid = codec.issue(&account(), TokenKind::Refresh, Duration::minutes(5)).unwrap();
        let payload = valid.split('.').nth(1).unwrap();

        // {"alg":"none","typ":"JWT"}
        let none_header = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0";
        let forged = format!("{}.{}.", none_header, payload);

        assert_eq!(codec.decode(&forged).unwrap_err(), AppError::InvalidSignature);
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let codec = codec();
        let token = codec.issue(&account(), TokenKind::Access, Duration::zero()).unwrap();

        assert_eq!(codec.decode(&token).unwrap_err(), AppError::Expired);
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let codec = codec();
        let token = codec.issue(&account(), TokenKind::Refresh, Duration::minutes(-10)).unwrap();

        assert_eq!(codec.decode(&token).unwrap_err(), AppError::Expired);
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let codec = codec();
        let expired = codec.issue(&account(), TokenKind::Access, Duration::minutes(-10)).unwrap();
        let tampered = replace_char_at(&expired, expired.len() - 2);

        assert_eq!(codec.decode(&tampered).unwrap_err(), AppError::InvalidSignature);
    }
}
