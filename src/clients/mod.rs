//! HTTP transport types for Jamf Pro communication.
//!
//! This module provides the transport layer that resource accessors sit on.
//! Accessors depend only on the [`Transport`] trait; [`HttpClient`] is the
//! `reqwest` implementation that knows about base URLs, credentials and
//! headers.
//!
//! # Overview
//!
//! - [`Transport`]: One round trip, request in, response out
//! - [`HttpClient`]: The async HTTP client for Classic API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API with its raw body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Retry Behavior
//!
//! None. Every call performs exactly one round trip and reports failures to
//! the caller, which decides whether to try again.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLASSIC_API_BASE_PATH, SDK_VERSION};
pub(crate) use http_client::summarize_error_body;
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
