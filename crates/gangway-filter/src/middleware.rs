//! Origin filtering as a tower middleware.
//!
//! Wraps an arbitrary service without changing its calling contract: allowed
//! requests pass through untouched, denied ones are answered with an empty
//! 403 before the inner service ever sees them.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::warn;

use crate::filter::OriginFilter;

/// Layer applying one shared [`OriginFilter`] to every wrapped service.
#[derive(Clone)]
pub struct OriginFilterLayer {
    filter: Arc<OriginFilter>,
}

impl OriginFilterLayer {
    /// Wrap services with the given filter.
    pub fn new(filter: Arc<OriginFilter>) -> Self {
        Self { filter }
    }
}

impl<S> Layer<S> for OriginFilterLayer {
    type Service = OriginFilterService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OriginFilterService {
            inner,
            filter: Arc::clone(&self.filter),
        }
    }
}

/// Service produced by [`OriginFilterLayer`].
#[derive(Clone)]
pub struct OriginFilterService<S> {
    inner: S,
    filter: Arc<OriginFilter>,
}

impl<S> Service<Request<Body>> for OriginFilterService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let filter = Arc::clone(&self.filter);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // The transport-reported peer address, port already stripped by
            // the socket-address layer. Requires the server to be built with
            // `into_make_service_with_connect_info::<SocketAddr>()`.
            let origin = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ci| ci.0);

            match origin {
                Some(addr) if filter.is_allowed(addr.ip()) => inner.call(req).await,
                Some(addr) => {
                    warn!(origin = %addr, "denied request from unallowed network");
                    Ok(forbidden())
                }
                None => {
                    // Nothing to judge the request by; fail closed.
                    warn!("denied request with no transport origin");
                    Ok(forbidden())
                }
            }
        })
    }
}

fn forbidden() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::FORBIDDEN;
    response
}
