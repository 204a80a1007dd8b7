// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JWT-shaped mock tokens
//!
//! `<b64(header)>.<b64(payload)>.<random signature>`. The signature is random
//! text, so these tokens decode like a JWT but never verify.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::config::RoleFlags;
use super::random::{RandomSource, ThreadRandom};
use crate::error::{Error, Result};

const NODE_ID_LEN: usize = 16;
const SIGNATURE_LEN: usize = 43;

/// Token header segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Token payload segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub username: String,
    pub node_id: String,
    pub is_admin: bool,
    pub is_verified: bool,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expiry, Unix seconds
    pub exp: i64,
}

impl TokenClaims {
    /// Validity window in seconds
    pub fn lifetime_secs(&self) -> i64 {
        self.exp - self.iat
    }

    /// Whether `now` falls inside `[iat, exp]`
    pub fn is_live_at(&self, now: i64) -> bool {
        self.iat <= now && now <= self.exp
    }
}

/// An issued mock token and the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockToken {
    pub token: String,
    pub claims: TokenClaims,
}

impl MockToken {
    /// The encoded token string
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for MockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Builds mock tokens from an injected random source
#[derive(Clone)]
pub struct TokenIssuer {
    random: Arc<dyn RandomSource>,
    roles: RoleFlags,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom), RoleFlags::default())
    }
}

impl TokenIssuer {
    /// Create an issuer
    pub fn new(random: Arc<dyn RandomSource>, roles: RoleFlags) -> Self {
        Self { random, roles }
    }

    /// Issue a token for `username` valid from `issued_at` for `ttl`
    ///
    /// Fails with [`Error::Config`] if `issued_at + ttl` does not fit an `i64`
    /// timestamp.
    pub fn issue(&self, username: &str, issued_at: i64, ttl: Duration) -> Result<MockToken> {
        let exp = i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|lifetime| issued_at.checked_add(lifetime))
            .ok_or_else(|| {
                Error::Config(format!("token lifetime of {}s is out of range", ttl.as_secs()))
            })?;

        let claims = TokenClaims {
            username: username.to_string(),
            node_id: self.random.hex(NODE_ID_LEN),
            is_admin: self.roles.admin,
            is_verified: self.roles.verified,
            iat: issued_at,
            exp,
        };

        let header = encode_segment(&TokenHeader::default())?;
        let payload = encode_segment(&claims)?;
        let signature = self.random.alphanumeric(SIGNATURE_LEN);

        Ok(MockToken {
            token: format!("{}.{}.{}", header, payload, signature),
            claims,
        })
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(value)?))
}

/// Split a token into its three segments
fn segments(token: &str) -> Result<[&str; 3]> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
            Ok([h, p, s])
        }
        _ => Err(Error::invalid_token("expected three non-empty segments")),
    }
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| Error::invalid_token(format!("bad base64: {}", e)))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode the header of a mock token without verifying anything
pub fn decode_header(token: &str) -> Result<TokenHeader> {
    let [header, _, _] = segments(token)?;
    decode_segment(header)
}

/// Decode the claims of a mock token without verifying anything
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let [_, payload, _] = segments(token)?;
    decode_segment(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::random::SeededRandom;

    /// Every byte is the same value
    struct FixedRandom(u8);

    impl RandomSource for FixedRandom {
        fn fill_bytes(&self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
    }

    fn issuer(random: impl RandomSource + 'static) -> TokenIssuer {
        TokenIssuer::new(Arc::new(random), RoleFlags::default())
    }

    #[test]
    fn test_exact_shape_with_fixed_random() {
        let token = issuer(FixedRandom(0xab))
            .issue("im", 1_700_000_000, Duration::from_secs(3_600))
            .unwrap();

        let [header, _, signature] = segments(token.as_str()).unwrap();
        assert_eq!(header, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        // 0xab % 62 == 47 -> 'v'
        assert_eq!(signature, "v".repeat(SIGNATURE_LEN));
        assert_eq!(token.claims.node_id, "abababababababab");
        assert_eq!(token.claims.exp, 1_700_003_600);
    }

    #[test]
    fn test_claims_round_trip_through_decoder() {
        let token = issuer(SeededRandom::new(1))
            .issue("im", 1_700_000_000, Duration::from_secs(2_592_000))
            .unwrap();

        let claims = decode_claims(token.as_str()).unwrap();
        assert_eq!(claims, token.claims);
        assert_eq!(claims.lifetime_secs(), 2_592_000);
        assert!(claims.is_admin && claims.is_verified);
        assert_eq!(decode_header(token.as_str()).unwrap(), TokenHeader::default());
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let token = issuer(FixedRandom(1))
            .issue("im", 10, Duration::from_secs(5))
            .unwrap();
        let [_, payload, _] = segments(token.as_str()).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();

        assert_eq!(json["username"], "im");
        assert_eq!(json["nodeId"], "0101010101010101");
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["iat"], 10);
        assert_eq!(json["exp"], 15);
    }

    #[test]
    fn test_roles_follow_config() {
        let issuer = TokenIssuer::new(
            Arc::new(ThreadRandom),
            RoleFlags { admin: false, verified: true },
        );
        let token = issuer.issue("im", 0, Duration::from_secs(1)).unwrap();
        assert!(!token.claims.is_admin);
        assert!(token.claims.is_verified);
    }

    #[test]
    fn test_live_window() {
        let token = TokenIssuer::default()
            .issue("im", 100, Duration::from_secs(50))
            .unwrap();
        assert!(token.claims.is_live_at(100));
        assert!(token.claims.is_live_at(150));
        assert!(!token.claims.is_live_at(151));
        assert!(!token.claims.is_live_at(99));
    }

    #[test]
    fn test_lifetime_overflow_is_config_error() {
        let issuer = issuer(FixedRandom(1));
        for ttl in [u64::MAX, i64::MAX as u64] {
            let err = issuer
                .issue("im", 1_700_000_000, Duration::from_secs(ttl))
                .unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{} gave {:?}", ttl, err);
        }

        let token = issuer
            .issue("im", 0, Duration::from_secs(i64::MAX as u64))
            .unwrap();
        assert_eq!(token.claims.exp, i64::MAX);
    }

    #[test]
    fn test_decode_rejects_bad_tokens() {
        for bad in ["", "a.b", "a.b.c.d", "a..c", "!!!.@@@.sig"] {
            assert!(decode_claims(bad).is_err(), "{:?} should not decode", bad);
        }
    }
}
