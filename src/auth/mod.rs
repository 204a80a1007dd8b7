// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Mock sign-in
//!
//! [`LoginInterceptor`] plugs into an [`HttpClient`](crate::http::HttpClient)
//! and answers requests to the sign-in endpoint with fabricated tokens.
//! Tokens are shaped like JWTs so front-end code can decode them, but they
//! carry a random signature and cannot be verified.

use std::time::Duration;

mod config;
mod credentials;
mod random;
mod responder;
mod token;

pub use config::{MockAuthConfig, RoleFlags};
pub use credentials::{Credentials, LoginAttempt};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use responder::{LoginFailure, LoginInterceptor, LoginSuccess, INVALID_CREDENTIALS};
pub use token::{decode_claims, decode_header, MockToken, TokenClaims, TokenHeader, TokenIssuer};

/// URL substring identifying sign-in requests
pub const LOGIN_PATH_MARKER: &str = "/sign-in";

/// Username the mock accepts
pub const DEFAULT_USERNAME: &str = "im";

/// Password the mock accepts
pub const DEFAULT_PASSWORD: &str = "ACK071675";

/// Access token validity (1 hour)
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Refresh token validity (30 days)
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);
