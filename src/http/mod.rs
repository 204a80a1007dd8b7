// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! Requests go through the client's interceptor chain first. Only requests
//! no interceptor answers reach the [`Transport`].

mod client;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, RequestBuilder};
pub use request::Request;
pub use response::Response;
pub use transport::{HttpClientConfig, ReqwestTransport, Transport};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("signin-shim/", env!("CARGO_PKG_VERSION"));

/// Content types used for synthetic responses
pub mod content_types {
    pub const JSON: &str = "application/json";
    pub const JAVASCRIPT: &str = "application/javascript";
}
