//! Tower middleware for bearer-token extraction.
//!
//! Provides [`BearerAuthLayer`] and [`BearerAuthService`], which run the
//! [`Authenticator`] against each incoming HTTP request. On success the
//! extracted [`BearerToken`] is injected into request extensions for a
//! downstream validator; on failure the response carries the mapped status
//! code and a `WWW-Authenticate` challenge header.
//!
//! Token *validation* stays downstream: this layer only establishes that
//! exactly one syntactically-valid credential was presented, and where.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::Layer;

use crate::authenticate::Authenticator;
use crate::error::Error;
use crate::request::{is_form_content_type, RequestParts};

/// Body bytes buffered when sniffing a form-encoded body for
/// `access_token`. Matches axum's default request body limit.
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Tower layer that wraps services with bearer-token extraction.
///
/// # Example
///
/// ```rust,no_run
/// use tower_bearer::BearerAuthLayer;
///
/// let layer = BearerAuthLayer::new()
///     .scope("openid")
///     .scope("profile")
///     .public_path("/health");
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuthLayer {
    authenticator: Authenticator,
    scopes: Vec<String>,
    public_paths: Vec<String>,
    body_limit: usize,
}

impl BearerAuthLayer {
    /// Create a layer with no advertised scopes and no public paths.
    pub fn new() -> Self {
        Self {
            authenticator: Authenticator::new(),
            scopes: Vec::new(),
            public_paths: Vec::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Advertise a scope in challenge responses.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Add a path prefix that bypasses extraction entirely.
    pub fn public_path(mut self, path: impl Into<String>) -> Self {
        self.public_paths.push(path.into());
        self
    }

    /// Cap the number of body bytes buffered for form-encoded requests.
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for BearerAuthLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuthService {
            inner,
            authenticator: self.authenticator.clone(),
            scopes: self.scopes.clone(),
            public_paths: self.public_paths.clone(),
            body_limit: self.body_limit,
        }
    }
}

/// Tower service that extracts bearer tokens from HTTP requests.
///
/// Created by [`BearerAuthLayer`]. For each incoming request:
///
/// 1. Skips public paths untouched
/// 2. Buffers the body only when its content type is form-urlencoded,
///    reinstating the bytes for the inner service afterwards
/// 3. Runs the [`Authenticator`] over header, form, and query locations
/// 4. On success, injects the [`BearerToken`](crate::BearerToken) into
///    request extensions
/// 5. On failure, answers with the mapped status and a `WWW-Authenticate`
///    challenge
#[derive(Debug, Clone)]
pub struct BearerAuthService<S> {
    inner: S,
    authenticator: Authenticator,
    scopes: Vec<String>,
    public_paths: Vec<String>,
    body_limit: usize,
}

impl<S> tower_service::Service<Request<Body>> for BearerAuthService<S>
where
    S: tower_service::Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Into<crate::BoxError> + Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let authenticator = self.authenticator.clone();
        let scopes = self.scopes.clone();
        let public_paths = self.public_paths.clone();
        let body_limit = self.body_limit;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if public_paths.iter().any(|p| path.starts_with(p.as_str())) {
                return inner.call(req).await;
            }

            let (parts, body) = req.into_parts();

            // Form-encoded bodies are the only ones that can carry a
            // token, so only those get buffered. The bytes are handed
            // back to the inner service unchanged.
            let (source, body) = if is_form_content_type(&parts.headers) {
                let bytes = match axum::body::to_bytes(body, body_limit).await {
                    Ok(bytes) => bytes,
                    Err(error) => {
                        tracing::debug!(%error, "failed to buffer form body");
                        return Ok(StatusCode::BAD_REQUEST.into_response());
                    }
                };
                let source = RequestParts::from_http(&parts, Some(&bytes));
                (source, Body::from(bytes))
            } else {
                (RequestParts::from_http(&parts, None), body)
            };

            match authenticator.authenticate(&source) {
                Ok(token) => {
                    tracing::debug!("bearer credential extracted");
                    let mut req = Request::from_parts(parts, body);
                    req.extensions_mut().insert(token);
                    inner.call(req).await
                }
                Err(error) => {
                    tracing::debug!(%error, status = %error.status_code(), "bearer extraction failed");
                    Ok(challenge_response(&error, &scopes))
                }
            }
        })
    }
}

/// Build the HTTP response for a failed extraction: the mapped status
/// code, a `WWW-Authenticate` header, and a JSON error body when the
/// failure carries an RFC error code.
fn challenge_response(error: &Error, scopes: &[String]) -> Response {
    let challenge = error.to_challenge(scopes);
    let header_value = challenge.header_value();

    let mut response = match challenge.challenge_error() {
        Some(challenge_error) => {
            (error.status_code(), axum::Json(challenge_error)).into_response()
        }
        None => error.status_code().into_response(),
    };

    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        header_value
            .parse()
            .unwrap_or_else(|_| "Bearer".parse().unwrap()),
    );
    response
}
