//! Error types for Classic API resource operations.
//!
//! Every accessor failure carries the resource name and the operation that
//! failed, so callers can report `Printer update_by_name` rather than a bare
//! status code.
//!
//! # Error Kinds
//!
//! - [`ResourceError::Transport`]: the round trip failed or the server
//!   answered with a non-2xx status
//! - [`ResourceError::Encode`]: the record could not be written as XML
//! - [`ResourceError::Decode`]: the response body did not match the expected
//!   shape
//! - [`ResourceError::PathResolutionFailed`]: the resource does not offer the
//!   operation; nothing was sent
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::{ClassicResource, ResourceError};
//! use jamfpro::classic::resources::Printer;
//!
//! match Printer::get_by_id(&client, 12).await {
//!     Ok(printer) => println!("Found: {:?}", printer.name),
//!     Err(e) if e.is_not_found() => println!("no printer 12"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::classic::ResourceOperation;
use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Classic API resource operations.
///
/// # Example
///
/// ```rust
/// use jamfpro::classic::{ResourceError, ResourceOperation};
///
/// let error = ResourceError::PathResolutionFailed {
///     resource: "Computer Invitation",
///     operation: ResourceOperation::UpdateById,
/// };
/// assert!(error.to_string().contains("Computer Invitation"));
/// assert!(error.to_string().contains("update_by_id"));
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request could not be delivered or the server rejected it.
    ///
    /// Carries the HTTP status code when the server answered.
    #[error("{resource} {operation} failed: {source}")]
    Transport {
        /// Human-readable resource name (e.g., "Dock Item").
        resource: &'static str,
        /// The operation being attempted.
        operation: ResourceOperation,
        /// The underlying transport failure.
        #[source]
        source: HttpError,
    },

    /// The record could not be serialized to XML.
    #[error("{resource} {operation} failed to encode request body: {source}")]
    Encode {
        /// Human-readable resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: ResourceOperation,
        /// The serializer failure.
        #[source]
        source: quick_xml::se::SeError,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("{resource} {operation} failed to decode response body: {source}")]
    Decode {
        /// Human-readable resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: ResourceOperation,
        /// The deserializer failure.
        #[source]
        source: quick_xml::de::DeError,
    },

    /// The resource declares no path for the operation.
    ///
    /// Returned before any request is sent.
    #[error("Cannot resolve path for {resource} {operation}")]
    PathResolutionFailed {
        /// Human-readable resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: ResourceOperation,
    },
}

impl ResourceError {
    /// Returns the HTTP status code if the server answered with an error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_not_found())
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> ResourceOperation {
        match self {
            Self::Transport { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Decode { operation, .. }
            | Self::PathResolutionFailed { operation, .. } => *operation,
        }
    }

    /// Returns the name of the resource the operation targeted.
    #[must_use]
    pub const fn resource(&self) -> &'static str {
        match self {
            Self::Transport { resource, .. }
            | Self::Encode { resource, .. }
            | Self::Decode { resource, .. }
            | Self::PathResolutionFailed { resource, .. } => *resource,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn not_found() -> ResourceError {
        ResourceError::Transport {
            resource: "Script",
            operation: ResourceOperation::GetById,
            source: HttpError::Response(HttpResponseError {
                code: 404,
                message: "Not Found".to_string(),
            }),
        }
    }

    #[test]
    fn test_transport_error_formats_resource_operation_and_cause() {
        let message = not_found().to_string();

        assert!(message.contains("Script"));
        assert!(message.contains("get_by_id"));
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_status_and_is_not_found() {
        let error = not_found();
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());

        let conflict = ResourceError::Transport {
            resource: "Account",
            operation: ResourceOperation::Create,
            source: HttpError::Response(HttpResponseError {
                code: 409,
                message: "Conflict".to_string(),
            }),
        };
        assert_eq!(conflict.status(), Some(409));
        assert!(!conflict.is_not_found());
    }

    #[test]
    fn test_decode_error_has_no_status() {
        #[derive(Debug, serde::Deserialize)]
        struct Probe {
            #[allow(dead_code)]
            id: i64,
        }

        let source = quick_xml::de::from_str::<Probe>("<probe><id>abc</id></probe>").unwrap_err();
        let error = ResourceError::Decode {
            resource: "Printer",
            operation: ResourceOperation::List,
            source,
        };

        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("decode"));
    }

    #[test]
    fn test_operation_and_resource_accessors() {
        let error = ResourceError::PathResolutionFailed {
            resource: "Computer Invitation",
            operation: ResourceOperation::UpdateByName,
        };

        assert_eq!(error.operation(), ResourceOperation::UpdateByName);
        assert_eq!(error.resource(), "Computer Invitation");
    }

    #[test]
    fn test_source_chain_reaches_http_error() {
        let error = not_found();
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("404"));
    }
}
