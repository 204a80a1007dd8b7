// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # signin-shim - Mock sign-in for front-end development
//!
//! An HTTP client whose requests run through an explicit interceptor chain.
//! The [`LoginInterceptor`] answers sign-in requests locally with
//! JWT-shaped mock tokens for a single compiled-in credential pair; every
//! other request goes to the real transport untouched.
//!
//! ## Features
//!
//! - Login interception: `/sign-in` requests never hit the network
//! - Mock tokens: decodable header/payload, random signature
//! - Injectable randomness for reproducible tokens in tests
//! - Optional script guard: failed optional script loads become empty scripts
//! - Request logging that never records bodies
//!
//! ## Example
//!
//! ```rust,no_run
//! use signin_shim::{HttpClient, LoginInterceptor, LoginSuccess, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new()?.with_interceptor(LoginInterceptor::new());
//!
//!     let request = Request::post("https://app.example.com/api/sign-in")?
//!         .json(&serde_json::json!({ "username": "im", "password": "ACK071675" }))?;
//!     let response = client.execute(request).await?;
//!
//!     let tokens: LoginSuccess = response.json()?;
//!     println!("access token: {}", tokens.access_token);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod http;
pub mod network;

// Re-exports for convenience

// Mock sign-in
pub use auth::{
    Credentials, LoginFailure, LoginInterceptor, LoginSuccess, MockAuthConfig, RoleFlags,
};
pub use auth::{MockToken, TokenClaims, TokenIssuer, decode_claims};
pub use auth::{RandomSource, SeededRandom, ThreadRandom};

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, Transport};

// Network
pub use network::{InterceptAction, InterceptorChain, OptionalScriptGuard, RequestInterceptor, RequestLogger};

/// signin-shim version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
