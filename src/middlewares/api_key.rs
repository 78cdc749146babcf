use crate::error;
use axum::{
    http::{HeaderMap, HeaderName, Request},
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::{
    convert::Infallible,
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Rejects requests whose `x-api-key` header does not match the configured key
/// before the inner service sees them. Without a configured key nothing passes.
#[derive(Debug, Clone)]
pub struct ApiKeyLayer {
    api_key: Option<Arc<str>>,
}

impl ApiKeyLayer {
    pub fn new(api_key: Option<Arc<str>>) -> Self {
        Self { api_key }
    }
}

impl<S> Layer<S> for ApiKeyLayer {
    type Service = ApiKey<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKey::new(self.api_key.clone(), inner)
    }
}

#[derive(Debug, Clone)]
pub struct ApiKey<S> {
    api_key: Option<Arc<str>>,
    inner: S,
}

impl<S> ApiKey<S> {
    fn new(api_key: Option<Arc<str>>, inner: S) -> Self {
        ApiKey { api_key, inner }
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let (Some(expected), Some(given)) = (self.api_key.as_deref(), headers.get(X_API_KEY))
        else {
            return false;
        };

        given.as_bytes() == expected.as_bytes()
    }
}

impl<S, B> Service<Request<B>> for ApiKey<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        if !self.authorized(req.headers()) {
            warn!(path = %req.uri().path(), "rejected request with missing or invalid api key");
            return Box::pin(async { Ok(error::UNAUTHORIZED.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
