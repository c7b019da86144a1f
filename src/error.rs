//! Error types for the Jamf Pro SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use jamfpro::{InstanceName, ConfigError};
//!
//! let result = InstanceName::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidInstanceName { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Jamf Pro bearer token.")]
    EmptyAccessToken,

    /// Username for basic credentials cannot be empty.
    #[error("Username cannot be empty when using basic credentials.")]
    EmptyUsername,

    /// Instance name is invalid.
    #[error("Invalid instance name '{name}'. Expected the subdomain of a jamfcloud.com instance (e.g., 'acme').")]
    InvalidInstanceName {
        /// The invalid instance name that was provided.
        name: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http or https URL (e.g., 'https://jamf.example.com:8443').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Log level is not recognised.
    #[error("Invalid log level '{level}'. Expected one of: none, error, warn, info, debug.")]
    InvalidLogLevel {
        /// The log level string that was provided.
        level: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    ReadFile {
        /// The path of the file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected layout.
    #[error("Failed to parse configuration file '{path}': {source}")]
    ParseFile {
        /// The path of the file.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
