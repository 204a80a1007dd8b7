// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;

use super::request::Request;
use super::response::Response;
use super::transport::{HttpClientConfig, ReqwestTransport, Transport};
use crate::error::{Error, Result};
use crate::network::{InterceptAction, InterceptorChain, RequestInterceptor};

/// HTTP client that runs every request through an interceptor chain
///
/// Interceptors are composed explicitly with [`HttpClient::with_interceptor`].
/// A client without interceptors is a thin wrapper around its transport.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    interceptors: Arc<InterceptorChain>,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            interceptors: Arc::new(InterceptorChain::new()),
            config,
        })
    }

    /// Create a client over a custom transport
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            interceptors: Arc::new(InterceptorChain::new()),
            config: HttpClientConfig::default(),
        }
    }

    /// Add an interceptor to this client's chain
    pub fn with_interceptor<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        Arc::make_mut(&mut self.interceptors).add(interceptor);
        self
    }

    /// Get the interceptor chain
    pub fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::get(url)?).await
    }

    /// Execute a POST request
    pub async fn post(&self, url: impl AsRef<str>, body: impl Into<Bytes>) -> Result<Response> {
        self.execute(Request::post(url)?.body(body)).await
    }

    /// Execute a request
    pub async fn execute(&self, mut request: Request) -> Result<Response> {
        match self.interceptors.process_request(&mut request).await? {
            InterceptAction::Continue => {}
            InterceptAction::MockResponse(response) => {
                tracing::debug!(
                    url = %request.url,
                    status = %response.status,
                    "Request answered by interceptor"
                );
                return Ok(response);
            }
            InterceptAction::Abort(reason) => {
                return Err(Error::aborted(request.url.as_str(), reason));
            }
        }

        tracing::debug!(method = %request.method, url = %request.url, "Passing request through");

        match self.transport.send(&request).await {
            Ok(mut response) => {
                self.interceptors
                    .process_response(&request, &mut response)
                    .await?;
                Ok(response)
            }
            Err(error) => match self.interceptors.recover_error(&request, &error).await {
                Some(response) => Ok(response),
                None => Err(error),
            },
        }
    }

    /// Execute multiple requests concurrently
    pub async fn execute_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests.into_iter().map(|r| self.execute(r)).collect();
        futures::future::join_all(futures).await
    }

    /// Create a request builder
    pub fn request(&self, method: Method, url: impl AsRef<str>) -> Result<RequestBuilder> {
        Ok(RequestBuilder {
            client: self.clone(),
            request: Request::new(method, url)?,
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

/// Builder for executing requests with the client
pub struct RequestBuilder {
    client: HttpClient,
    request: Request,
}

impl RequestBuilder {
    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.request = self.request.body(body);
        self
    }

    /// Set JSON body
    pub fn json<T: serde::Serialize>(mut self, data: &T) -> Result<Self> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request = self.request.timeout(timeout);
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Response> {
        self.client.execute(self.request).await
    }
}
