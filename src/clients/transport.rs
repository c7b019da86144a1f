//! The transport seam between resource accessors and the network.
//!
//! Resource accessors never talk to `reqwest` directly; they hand a fully
//! built [`HttpRequest`] to a [`Transport`] and get back an [`HttpResponse`].
//! [`HttpClient`](crate::clients::HttpClient) is the production
//! implementation. Tests and callers with their own HTTP stack can provide
//! another one.

use std::sync::Arc;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
///
/// Implementations own authentication, connection reuse and timeouts.
/// A non-2xx answer should be reported as [`HttpError::Response`]; accessors
/// also treat an `Ok` response with a non-2xx code as a failure.
///
/// Implementations must be `Send + Sync` so one transport can serve
/// concurrent accessor calls.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the server's response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
