// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Mock sign-in configuration

use std::time::Duration;

use super::credentials::Credentials;
use super::{ACCESS_TOKEN_TTL, LOGIN_PATH_MARKER, REFRESH_TOKEN_TTL};

/// Role flags stamped into every token payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFlags {
    pub admin: bool,
    pub verified: bool,
}

impl Default for RoleFlags {
    fn default() -> Self {
        Self {
            admin: true,
            verified: true,
        }
    }
}

/// Mock sign-in configuration
#[derive(Debug, Clone)]
pub struct MockAuthConfig {
    /// URL substring that marks a sign-in request
    pub login_path_marker: String,
    /// The accepted credential pair
    pub credentials: Credentials,
    /// Access token validity
    pub access_token_ttl: Duration,
    /// Refresh token validity
    pub refresh_token_ttl: Duration,
    /// Role flags for issued tokens
    pub roles: RoleFlags,
}

impl Default for MockAuthConfig {
    fn default() -> Self {
        Self {
            login_path_marker: LOGIN_PATH_MARKER.to_string(),
            credentials: Credentials::default(),
            access_token_ttl: ACCESS_TOKEN_TTL,
            refresh_token_ttl: REFRESH_TOKEN_TTL,
            roles: RoleFlags::default(),
        }
    }
}

impl MockAuthConfig {
    /// Create a new config with the compiled-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the login path marker
    pub fn login_path_marker(mut self, marker: impl Into<String>) -> Self {
        self.login_path_marker = marker.into();
        self
    }

    /// Set the accepted credential pair
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set access token validity
    pub fn access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Set refresh token validity
    pub fn refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }

    /// Set role flags
    pub fn roles(mut self, roles: RoleFlags) -> Self {
        self.roles = roles;
        self
    }
}
