// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Credential pair and decoded sign-in attempts

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::error::{Error, Result};

/// Module for deserializing SecretString from plain JSON strings.
mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }

    pub fn empty() -> SecretString {
        SecretString::new(String::new().into())
    }
}

/// The one username/password pair the mock accepts
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Accepted username
    pub username: String,
    /// Accepted password
    pub password: SecretString,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Exact comparison of both fields
    ///
    /// Not constant-time. Fine for a demo mock, wrong for anything real.
    pub fn matches(&self, attempt: &LoginAttempt) -> bool {
        attempt.username == self.username
            && attempt.password.expose_secret() == self.password.expose_secret()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

/// Decoded sign-in request body
///
/// Missing fields decode as empty strings, so `{}` is a valid (and failing)
/// attempt.
#[derive(Debug, Deserialize)]
pub struct LoginAttempt {
    #[serde(default)]
    pub username: String,
    #[serde(default = "secret_string::empty", deserialize_with = "secret_string::deserialize")]
    pub password: SecretString,
}

impl LoginAttempt {
    /// Decode a sign-in body sent to `url`
    ///
    /// An absent or empty body is read as `{}`. Anything that is not a JSON
    /// object with string fields is a [`Error::MalformedRequest`].
    pub fn from_body(url: &str, body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self {
                username: String::new(),
                password: secret_string::empty(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| Error::malformed_request(url, &e))?;

        if !value.is_object() {
            return Err(Error::malformed(url, "sign-in body is not a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| Error::malformed_request(url, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://app.local/api/sign-in";

    #[test]
    fn test_default_pair_matches() {
        let attempt =
            LoginAttempt::from_body(URL, br#"{"username":"im","password":"ACK071675"}"#).unwrap();
        assert!(Credentials::default().matches(&attempt));
    }

    #[test]
    fn test_exact_match_only() {
        let creds = Credentials::default();
        for body in [
            r#"{"username":"IM","password":"ACK071675"}"#,
            r#"{"username":"im","password":"ack071675"}"#,
            r#"{"username":"im ","password":"ACK071675"}"#,
            r#"{"username":"im"}"#,
        ] {
            let attempt = LoginAttempt::from_body(URL, body.as_bytes()).unwrap();
            assert!(!creds.matches(&attempt), "{} should not match", body);
        }
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let attempt = LoginAttempt::from_body(URL, b"").unwrap();
        assert_eq!(attempt.username, "");
        assert!(!Credentials::default().matches(&attempt));
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = LoginAttempt::from_body(URL, b"username=im&password=x").unwrap_err();
        assert!(err.is_malformed_request());
    }

    #[test]
    fn test_non_object_is_malformed() {
        for body in ["[\"im\",\"ACK071675\"]", "null", "42"] {
            let err = LoginAttempt::from_body(URL, body.as_bytes()).unwrap_err();
            assert!(err.is_malformed_request(), "{} should be malformed", body);
        }
    }

    #[test]
    fn test_wrong_field_type_is_malformed_without_leaking() {
        let err = LoginAttempt::from_body(URL, br#"{"username":"im","password":987654}"#)
            .unwrap_err();
        assert!(err.is_malformed_request());
        assert!(!err.to_string().contains("987654"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::default();
        assert!(!format!("{:?}", creds).contains(DEFAULT_PASSWORD));
    }
}
