// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Optional script guard
//!
//! Some pages reference scripts that may not exist in every deployment.
//! A failed load of one of those should not surface as an error, so the
//! guard swaps the failure for an empty script and logs it at info level.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::interceptor_trait::RequestInterceptor;
use crate::error::{Error, Result};
use crate::http::{content_types, Request, Response};

/// Replaces failed optional script loads with an empty script
#[derive(Debug, Default, Clone)]
pub struct OptionalScriptGuard {
    /// URL substrings that mark a script as optional (empty = every script)
    markers: Vec<String>,
}

impl OptionalScriptGuard {
    /// Guard every script request
    pub fn new() -> Self {
        Self::default()
    }

    /// Only guard scripts whose URL contains one of `markers`
    pub fn for_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    fn empty_script(request: &Request) -> Response {
        Response::empty(StatusCode::OK, request.url.clone(), content_types::JAVASCRIPT)
    }
}

fn is_script(request: &Request) -> bool {
    let path = request.url.path();
    path.ends_with(".js") || path.ends_with(".mjs")
}

#[async_trait]
impl RequestInterceptor for OptionalScriptGuard {
    fn should_intercept(&self, request: &Request) -> bool {
        if !is_script(request) {
            return false;
        }
        self.markers.is_empty()
            || self
                .markers
                .iter()
                .any(|m| request.url.as_str().contains(m.as_str()))
    }

    async fn after_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        if !response.is_success() {
            tracing::info!(
                url = %request.url,
                status = %response.status,
                "Optional script not loaded"
            );
            *response = Self::empty_script(request);
        }
        Ok(())
    }

    async fn on_error(&self, request: &Request, error: &Error) -> Option<Response> {
        tracing::info!(url = %request.url, error = %error, "Optional script not loaded");
        Some(Self::empty_script(request))
    }

    fn priority(&self) -> i32 {
        -50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;
    use reqwest::header::HeaderMap;

    fn response(status: StatusCode, request: &Request) -> Response {
        Response::new(
            status,
            HeaderMap::new(),
            Bytes::from_static(b"console.log(1)"),
            request.url.clone(),
            false,
            1,
        )
    }

    #[test]
    fn test_only_scripts_are_guarded() {
        let guard = OptionalScriptGuard::new();
        let script = Request::get("https://cdn.example.com/sell/embed.js").unwrap();
        let module = Request::get("https://cdn.example.com/app.mjs?v=2").unwrap();
        let page = Request::get("https://example.com/index.html").unwrap();

        assert!(guard.should_intercept(&script));
        assert!(guard.should_intercept(&module));
        assert!(!guard.should_intercept(&page));
    }

    #[test]
    fn test_markers_narrow_scope() {
        let guard = OptionalScriptGuard::for_markers(["sellembed"]);
        let optional = Request::get("https://cdn.example.com/sellembed/v1.js").unwrap();
        let required = Request::get("https://cdn.example.com/app.js").unwrap();

        assert!(guard.should_intercept(&optional));
        assert!(!guard.should_intercept(&required));
    }

    #[tokio::test]
    async fn test_failed_load_becomes_empty_script() {
        let guard = OptionalScriptGuard::new();
        let request = Request::get("https://cdn.example.com/embed.js").unwrap();
        let mut resp = response(StatusCode::NOT_FOUND, &request);

        guard.after_response(&request, &mut resp).await.unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body_len(), 0);
        assert_eq!(resp.content_type(), Some("application/javascript"));
    }

    #[tokio::test]
    async fn test_successful_load_untouched() {
        let guard = OptionalScriptGuard::new();
        let request = Request::get("https://cdn.example.com/embed.js").unwrap();
        let mut resp = response(StatusCode::OK, &request);
        let before = resp.clone();

        guard.after_response(&request, &mut resp).await.unwrap();

        assert_eq!(resp, before);
    }

    #[tokio::test]
    async fn test_transport_error_recovered() {
        let guard = OptionalScriptGuard::new();
        let request = Request::get("https://cdn.example.com/embed.js").unwrap();

        let recovered = guard
            .on_error(&request, &Error::network("connection refused"))
            .await;

        assert_eq!(recovered.map(|r| r.status), Some(StatusCode::OK));
    }
}
