//! Transport-level errors.
//!
//! [`HttpError`] is what a [`Transport`](crate::clients::Transport) returns.
//! Resource accessors wrap it in
//! [`ResourceError::Transport`](crate::classic::ResourceError::Transport)
//! together with the resource and operation that failed.
//!
//! ```rust,ignore
//! use jamfpro::{HttpError, Transport};
//!
//! match client.send(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) if e.code == 401 => println!("check credentials"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpMethod;

/// The server answered with a non-2xx status.
///
/// Jamf Pro answers failed Classic API calls with a small HTML status page;
/// `message` holds the human-readable part of it.
///
/// ```rust
/// use jamfpro::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "The server has not found anything matching the request URI".to_string(),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "HTTP 404: The server has not found anything matching the request URI"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    pub code: u16,
    /// Error text extracted from the response body.
    pub message: String,
}

/// A request was rejected before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    #[error("request body for {path} has no content type")]
    MissingBodyType { path: String },

    #[error("{method} {path} requires a request body")]
    MissingBody { method: HttpMethod, path: String },
}

/// Everything that can go wrong during one round trip.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns `true` if the server reported that the record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message() {
        let error = HttpResponseError {
            code: 401,
            message: "The request requires user authentication".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 401: The request requires user authentication"
        );
    }

    #[test]
    fn test_invalid_request_messages_name_the_path() {
        let missing_body = InvalidHttpRequestError::MissingBody {
            method: HttpMethod::Put,
            path: "scripts/id/3".to_string(),
        };
        assert_eq!(
            missing_body.to_string(),
            "PUT scripts/id/3 requires a request body"
        );

        let missing_type = InvalidHttpRequestError::MissingBodyType {
            path: "scripts/id/3".to_string(),
        };
        assert_eq!(
            missing_type.to_string(),
            "request body for scripts/id/3 has no content type"
        );
    }

    #[test]
    fn test_status_and_not_found() {
        let error = HttpError::from(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());

        let error = HttpError::from(HttpResponseError {
            code: 409,
            message: "Conflict".to_string(),
        });
        assert!(!error.is_not_found());

        let error = HttpError::from(InvalidHttpRequestError::MissingBodyType {
            path: "printers".to_string(),
        });
        assert_eq!(error.status(), None);
    }
}
