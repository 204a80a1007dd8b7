// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/Response interceptor trait
//!
//! Middleware hooks an [`HttpClient`](crate::http::HttpClient) runs around its
//! transport. An interceptor can let a request continue, abort it, or answer
//! it locally without touching the network.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::http::{Request, Response};

/// Request interceptor trait
///
/// # Example
///
/// ```rust,no_run
/// use signin_shim::network::{RequestInterceptor, InterceptAction};
/// use signin_shim::http::Request;
/// use signin_shim::Result;
/// use async_trait::async_trait;
///
/// struct TraceHeader;
///
/// #[async_trait]
/// impl RequestInterceptor for TraceHeader {
///     async fn before_request(&self, req: &mut Request) -> Result<InterceptAction> {
///         req.headers.insert("x-trace", "1".parse().unwrap());
///         Ok(InterceptAction::Continue)
///     }
/// }
/// ```
#[async_trait]
#[allow(unused_variables)]
pub trait RequestInterceptor: Send + Sync {
    /// Called before a request is sent
    ///
    /// Can modify the request, abort it, or answer it. An `Err` is returned
    /// to the caller of [`HttpClient::execute`](crate::http::HttpClient::execute).
    async fn before_request(&self, request: &mut Request) -> Result<InterceptAction> {
        Ok(InterceptAction::Continue)
    }

    /// Called after the transport returned a response
    async fn after_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        Ok(())
    }

    /// Called when the transport failed
    ///
    /// Returning a response replaces the error.
    async fn on_error(&self, request: &Request, error: &Error) -> Option<Response> {
        None
    }

    /// Filter - return true if this interceptor should handle the request
    fn should_intercept(&self, request: &Request) -> bool {
        true
    }

    /// Priority - higher priority interceptors run first
    fn priority(&self) -> i32 {
        0
    }
}

/// Action to take after interception
#[derive(Debug, Clone)]
pub enum InterceptAction {
    /// Continue with the (possibly modified) request
    Continue,
    /// Abort the request with an error
    Abort(String),
    /// Return a mock response instead of making the actual request
    MockResponse(Response),
}

/// Request logger interceptor
///
/// Logs method, URL and status. Bodies are never logged since sign-in
/// payloads carry passwords.
#[derive(Debug, Default)]
pub struct RequestLogger {
    /// Filter by URL pattern
    pub url_filter: Option<String>,
}

impl RequestLogger {
    /// Only log requests whose URL contains `filter`
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            url_filter: Some(filter.into()),
        }
    }
}

#[async_trait]
impl RequestInterceptor for RequestLogger {
    fn should_intercept(&self, request: &Request) -> bool {
        if let Some(ref filter) = self.url_filter {
            request.url.as_str().contains(filter)
        } else {
            true
        }
    }

    async fn before_request(&self, request: &mut Request) -> Result<InterceptAction> {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            "Request"
        );
        Ok(InterceptAction::Continue)
    }

    async fn after_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        tracing::info!(
            url = %request.url,
            status = %response.status,
            time_ms = response.response_time_ms,
            "Response"
        );
        Ok(())
    }

    async fn on_error(&self, request: &Request, error: &Error) -> Option<Response> {
        tracing::warn!(url = %request.url, error = %error, "Request failed");
        None
    }

    fn priority(&self) -> i32 {
        100 // Log before anything can answer the request
    }
}

/// Interceptor chain - manages multiple interceptors
#[derive(Clone)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl InterceptorChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Add an interceptor
    pub fn add<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
        // Stable sort keeps insertion order among equal priorities
        self.interceptors.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Number of interceptors in the chain
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Process request through all interceptors
    ///
    /// Stops at the first action that is not [`InterceptAction::Continue`].
    pub async fn process_request(&self, request: &mut Request) -> Result<InterceptAction> {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }

            match interceptor.before_request(request).await? {
                InterceptAction::Continue => continue,
                action => return Ok(action),
            }
        }
        Ok(InterceptAction::Continue)
    }

    /// Process response through all interceptors
    pub async fn process_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }
            interceptor.after_response(request, response).await?;
        }
        Ok(())
    }

    /// Offer a transport error to the interceptors; the first response wins
    pub async fn recover_error(&self, request: &Request, error: &Error) -> Option<Response> {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }
            if let Some(response) = interceptor.on_error(request, error).await {
                return Some(response);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    /// Appends its tag to a shared log and continues
    struct Tagger {
        tag: &'static str,
        priority: i32,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl RequestInterceptor for Tagger {
        async fn before_request(&self, _request: &mut Request) -> Result<InterceptAction> {
            self.log.lock().push(self.tag);
            Ok(InterceptAction::Continue)
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    struct Answer;

    #[async_trait]
    impl RequestInterceptor for Answer {
        async fn before_request(&self, request: &mut Request) -> Result<InterceptAction> {
            Ok(InterceptAction::MockResponse(Response::empty(
                reqwest::StatusCode::NO_CONTENT,
                request.url.clone(),
                "text/plain",
            )))
        }
    }

    #[test]
    fn test_interceptor_chain() {
        let mut chain = InterceptorChain::new();
        chain.add(RequestLogger::default());
        chain.add(Answer);

        assert_eq!(chain.len(), 2);
    }

    #[tokio::test]
    async fn test_priority_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain = InterceptorChain::new();
        chain.add(Tagger { tag: "low", priority: -5, log: log.clone() });
        chain.add(Tagger { tag: "high", priority: 10, log: log.clone() });
        chain.add(Tagger { tag: "mid", priority: 0, log: log.clone() });

        let mut request = Request::get("https://example.com/").unwrap();
        let action = chain.process_request(&mut request).await.unwrap();

        assert!(matches!(action, InterceptAction::Continue));
        assert_eq!(*log.lock(), vec!["high", "mid", "low"]);
    }

    #[tokio::test]
    async fn test_first_answer_stops_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain = InterceptorChain::new();
        chain.add(Answer);
        chain.add(Tagger { tag: "after", priority: -1, log: log.clone() });

        let mut request = Request::get("https://example.com/").unwrap();
        let action = chain.process_request(&mut request).await.unwrap();

        assert!(matches!(action, InterceptAction::MockResponse(_)));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_logger_filter() {
        let logger = RequestLogger::filtered("/api/");
        let api = Request::get("https://example.com/api/items").unwrap();
        let page = Request::get("https://example.com/about").unwrap();

        assert!(logger.should_intercept(&api));
        assert!(!logger.should_intercept(&page));
    }
}
