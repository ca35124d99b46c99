/**
 * Token Codec
 *
 * JWT issue/verify for stateless sessions. A single symmetric secret is
 * injected once at startup via `TokenCodec::new`; nothing in this module
 * reads ambient global state at verification time.
 *
 * # Token Shape
 *
 * Compact JWS: HS256 header, payload with `sub` (user UUID, required),
 * optional display-only `name` / `url_photo` claims, `exp` (Unix
 * seconds) and `iat`. Tokens expire 24 hours after issue by default.
 *
 * # Verification
 *
 * The expected algorithm is pinned to exactly HS256. A token whose
 * header claims `none`, an RSA/EC scheme, or even a sibling HMAC
 * variant (HS384/HS512) is rejected as invalid, closing the classic
 * algorithm-confusion bypass. Expiry is checked with zero leeway.
 *
 * There is no revocation: a token stays valid until `exp`, and rotating
 * the secret is the only way to invalidate issued tokens early.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::ApiError;

/// Default token lifetime: 24 hours
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Token verification failure
///
/// `Expired` is reported only when the signature and shape were fine and
/// the expiry alone failed; everything else collapses into `Invalid`.
/// Both map to 401 at the HTTP boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, wrong algorithm, or malformed claims
    #[error("invalid token")]
    Invalid,
    /// Signature verified but the token is past its expiry
    #[error("token expired")]
    Expired,
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => ApiError::InvalidToken,
            TokenError::Expired => ApiError::Expired,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: Uuid,
    /// Display name (non-authoritative, for client convenience)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL (non-authoritative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_photo: Option<String>,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: u64,
}

/// Issues and verifies signed identity tokens
///
/// Cheap to clone; construct once from server configuration and share.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from the process-wide secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a signed token for `user_id`
    ///
    /// `name` and `url_photo` are display-only claims; authorization
    /// decisions must rely solely on `sub`.
    pub fn issue(
        &self,
        user_id: Uuid,
        name: Option<String>,
        url_photo: Option<String>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id,
            name,
            url_photo,
            exp: now + self.ttl.as_secs(),
            iat: now,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Checks, in effect: exact HS256 algorithm, signature under the
    /// codec's secret, claim shape (`sub` must be a UUID, `exp` must be
    /// present), and expiry with zero leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret", TOKEN_TTL)
    }

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let user_id = Uuid::new_v4();
        let token = codec()
            .issue(user_id, Some("Jane".to_string()), None)
            .unwrap();

        let claims = codec().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.name.as_deref(), Some("Jane"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = codec().issue(Uuid::new_v4(), None, None).unwrap();
        let other = TokenCodec::new(b"another-secret", TOKEN_TTL);
        assert_matches!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_matches!(codec().verify("garbage"), Err(TokenError::Invalid));
        assert_matches!(codec().verify("a.b.c"), Err(TokenError::Invalid));
        assert_matches!(codec().verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            name: None,
            url_photo: None,
            exp: now - 120,
            iat: now - 240,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_matches!(codec().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_sibling_hmac_algorithm_is_rejected() {
        // HS512 is the same family but not the pinned algorithm.
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            name: None,
            url_photo: None,
            exp: now + 600,
            iat: now,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_matches!(codec().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_unsigned_and_asymmetric_headers_are_rejected() {
        // jsonwebtoken refuses to encode these headers, so the tokens are
        // assembled by hand from base64url segments. The claims segment is
        // {"sub":"00000000-0000-0000-0000-000000000000",
        //  "exp":253402300799,"iat":1700000000} - a far-future expiry, so
        // only the algorithm check can reject them.
        let claims = "eyJzdWIiOiIwMDAwMDAwMC0wMDAwLTAwMDAtMDAwMC0wMDAwMDAwMDAwMDAiLCJleHAiOjI1MzQwMjMwMDc5OSwiaWF0IjoxNzAwMDAwMDAwfQ";

        // {"alg":"none","typ":"JWT"} with an empty signature segment.
        let unsigned = format!("eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.{claims}.");
        assert_matches!(codec().verify(&unsigned), Err(TokenError::Invalid));

        // {"alg":"RS256","typ":"JWT"}: asymmetric header against an HMAC
        // codec must never be treated as verifiable.
        let asymmetric = format!("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{claims}.c2ln");
        assert_matches!(codec().verify(&asymmetric), Err(TokenError::Invalid));
    }

    #[test]
    fn test_non_uuid_subject_is_invalid() {
        #[derive(serde::Serialize)]
        struct LooseClaims {
            sub: String,
            exp: u64,
            iat: u64,
        }
        let now = unix_now();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &LooseClaims {
                sub: "not-a-uuid".to_string(),
                exp: now + 600,
                iat: now,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_matches!(codec().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_token_remains_valid_for_full_ttl() {
        // No revocation exists: short of secret rotation, a token issued
        // with a ttl stays verifiable until its expiry, even if the user
        // "logged out" elsewhere.
        let user_id = Uuid::new_v4();
        let token = codec().issue(user_id, None, None).unwrap();

        let claims = codec().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL.as_secs());
        assert_matches!(codec().verify(&token), Ok(_));
    }
}
