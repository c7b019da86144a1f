//! Requests handed to a [`Transport`](crate::clients::Transport).
//!
//! A request names a method, a path relative to `/JSSResource` and, for
//! writes, an XML body. Query strings are never needed by the Classic API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Classic API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the method as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that must carry a payload.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataType {
    /// `application/xml`, the only payload format the Classic API accepts.
    Xml,
}

impl DataType {
    /// Returns the MIME type sent in the `Content-Type` header.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
        }
    }
}

/// A single Classic API call.
///
/// # Example
///
/// ```rust
/// use jamfpro::clients::{DataType, HttpMethod, HttpRequest};
///
/// let read = HttpRequest::builder(HttpMethod::Get, "scripts/id/1")
///     .build()
///     .unwrap();
/// assert!(read.body.is_none());
///
/// let write = HttpRequest::builder(HttpMethod::Post, "scripts/id/0")
///     .body("<script><name>hello</name></script>")
///     .body_type(DataType::Xml)
///     .build()
///     .unwrap();
/// assert_eq!(write.body_type, Some(DataType::Xml));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    /// Path below `/JSSResource`, already percent-encoded.
    pub path: String,
    pub body: Option<String>,
    pub body_type: Option<DataType>,
    /// Headers sent in addition to the client's defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Starts building a request.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                extra_headers: None,
            },
        }
    }

    /// Checks that writes carry a body and that a body has a content type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] describing the first problem found.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (&self.body, self.body_type) {
            (Some(_), None) => Err(InvalidHttpRequestError::MissingBodyType {
                path: self.path.clone(),
            }),
            (None, _) if self.http_method.requires_body() => {
                Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method,
                    path: self.path.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Sets the encoded payload. Pair it with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Adds a header on top of the client's defaults.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] when [`HttpRequest::verify`] fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_wire_names() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert!(HttpMethod::Put.requires_body());
        assert!(!HttpMethod::Delete.requires_body());
    }

    #[test]
    fn test_read_request_has_no_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "printers")
            .build()
            .unwrap();

        assert_eq!(request.path, "printers");
        assert!(request.body.is_none());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_write_request_carries_xml() {
        let request = HttpRequest::builder(HttpMethod::Put, "printers/id/3")
            .body("<printer><name>Lobby</name></printer>")
            .body_type(DataType::Xml)
            .build()
            .unwrap();

        assert_eq!(
            request.body.as_deref(),
            Some("<printer><name>Lobby</name></printer>")
        );
        assert_eq!(
            request.body_type.map(|t| t.as_content_type()),
            Some("application/xml")
        );
    }

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "printers/id/0").build();

        assert_eq!(
            result.unwrap_err(),
            InvalidHttpRequestError::MissingBody {
                method: HttpMethod::Post,
                path: "printers/id/0".to_string(),
            }
        );
    }

    #[test]
    fn test_body_without_content_type_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Delete, "printers/id/3")
            .body("<printer/>")
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType { path }) if path == "printers/id/3"
        ));
    }

    #[test]
    fn test_extra_headers_accumulate() {
        let request = HttpRequest::builder(HttpMethod::Get, "scripts")
            .header("X-Trace", "1")
            .header("X-Caller", "inventory-sync")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Caller").map(String::as_str), Some("inventory-sync"));
    }
}
