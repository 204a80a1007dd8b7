// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Login interceptor
//!
//! Answers sign-in requests locally: the configured credential pair gets a
//! fresh access/refresh token pair, anything else gets a 401. Requests that
//! are not sign-ins are left alone.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::config::MockAuthConfig;
use super::credentials::LoginAttempt;
use super::random::{RandomSource, ThreadRandom};
use super::token::TokenIssuer;
use crate::error::Result;
use crate::http::{Request, Response};
use crate::network::{InterceptAction, RequestInterceptor};

/// Error kind reported for rejected credentials
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

const INVALID_CREDENTIALS_MESSAGE: &str = "The username or password you entered is incorrect.";

/// Body of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSuccess {
    pub access_token: String,
    pub refresh_token: String,
    pub success: bool,
}

/// Body of a rejected sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFailure {
    pub error: String,
    pub message: String,
}

/// Interceptor that fabricates sign-in responses
#[derive(Clone)]
pub struct LoginInterceptor {
    config: MockAuthConfig,
    issuer: TokenIssuer,
}

impl Default for LoginInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginInterceptor {
    /// Interceptor with the compiled-in defaults
    pub fn new() -> Self {
        Self::with_config(MockAuthConfig::default())
    }

    /// Interceptor with a custom configuration
    pub fn with_config(config: MockAuthConfig) -> Self {
        let issuer = TokenIssuer::new(Arc::new(ThreadRandom), config.roles);
        Self { config, issuer }
    }

    /// Replace the random source used for node ids and signatures
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.issuer = TokenIssuer::new(random, self.config.roles);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &MockAuthConfig {
        &self.config
    }

    /// Whether `request` is a sign-in this interceptor answers
    pub fn matches(&self, request: &Request) -> bool {
        request
            .url
            .as_str()
            .contains(self.config.login_path_marker.as_str())
    }

    /// Build the mock response for a sign-in request
    ///
    /// Returns `Err` only when the body cannot be decoded. Wrong credentials
    /// produce an `Ok` 401 response.
    pub fn respond(&self, request: &Request) -> Result<Response> {
        let url = request.url.as_str();
        let attempt = match LoginAttempt::from_body(url, request.body_bytes()) {
            Ok(attempt) => attempt,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Rejected malformed sign-in payload");
                return Err(e);
            }
        };

        if !self.config.credentials.matches(&attempt) {
            tracing::info!(
                username = %attempt.username,
                outcome = "failure",
                "Mock sign-in rejected: invalid credentials"
            );
            let body = LoginFailure {
                error: INVALID_CREDENTIALS.to_string(),
                message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            };
            return Response::json_body(StatusCode::UNAUTHORIZED, request.url.clone(), &body);
        }

        let now = Utc::now().timestamp();
        let access = self
            .issuer
            .issue(&attempt.username, now, self.config.access_token_ttl)?;
        let refresh = self
            .issuer
            .issue(&attempt.username, now, self.config.refresh_token_ttl)?;

        tracing::info!(
            username = %attempt.username,
            outcome = "success",
            "Mock sign-in accepted"
        );

        let body = LoginSuccess {
            access_token: access.token,
            refresh_token: refresh.token,
            success: true,
        };
        Response::json_body(StatusCode::OK, request.url.clone(), &body)
    }
}

#[async_trait]
impl RequestInterceptor for LoginInterceptor {
    fn should_intercept(&self, request: &Request) -> bool {
        self.matches(request)
    }

    async fn before_request(&self, request: &mut Request) -> Result<InterceptAction> {
        self.respond(request).map(InterceptAction::MockResponse)
    }
}
