//! Configuration types for the Jamf Pro SDK.
//!
//! This module provides the core configuration types used to initialize
//! the HTTP transport that talks to a Jamf Pro server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`JamfConfig`]: The main configuration struct holding all SDK settings
//! - [`JamfConfigBuilder`]: A builder for constructing [`JamfConfig`] instances
//! - [`Credentials`]: Bearer token or basic credentials attached to every request
//! - [`InstanceName`]: A validated jamfcloud.com instance name
//! - [`BaseUrl`]: A validated server URL (on-premise servers, tests)
//! - [`AccessToken`] and [`Password`]: Secrets with masked debug output
//! - [`LogLevel`]: The logging preference carried with the configuration
//!
//! There is no process-wide default configuration; a [`JamfConfig`] is built
//! once and handed to [`HttpClient::new`](crate::clients::HttpClient::new).
//!
//! # Example
//!
//! ```rust
//! use jamfpro::{JamfConfig, InstanceName, AccessToken, Credentials};
//!
//! let config = JamfConfig::builder()
//!     .instance_name(InstanceName::new("acme").unwrap())
//!     .credentials(Credentials::Bearer(AccessToken::new("token").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://acme.jamfcloud.com");
//! ```

mod log_level;
mod newtypes;

pub use log_level::LogLevel;
pub use newtypes::{AccessToken, BaseUrl, InstanceName, Password};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials attached to every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`.
    Bearer(AccessToken),
    /// HTTP basic authentication.
    Basic {
        /// The Jamf Pro account name.
        username: String,
        /// The account password.
        password: Password,
    },
}

impl Credentials {
    /// Builds basic credentials, rejecting an empty username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if `username` is blank.
    pub fn basic(username: impl Into<String>, password: Password) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self::Basic { username, password })
    }
}

/// Configuration for the Jamf Pro SDK.
///
/// # Thread Safety
///
/// `JamfConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use jamfpro::{JamfConfig, BaseUrl, Credentials, Password, LogLevel};
///
/// let config = JamfConfig::builder()
///     .base_url(BaseUrl::new("https://jamf.example.com:8443").unwrap())
///     .credentials(Credentials::basic("api-user", Password::new("secret")).unwrap())
///     .log_level(LogLevel::Debug)
///     .hide_sensitive_data(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.hide_sensitive_data());
/// ```
#[derive(Clone, Debug)]
pub struct JamfConfig {
    base_url: BaseUrl,
    credentials: Credentials,
    log_level: LogLevel,
    hide_sensitive_data: bool,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl JamfConfig {
    /// Creates a new builder for constructing a `JamfConfig`.
    #[must_use]
    pub fn builder() -> JamfConfigBuilder {
        JamfConfigBuilder::new()
    }

    /// Loads a JSON client-config file.
    ///
    /// The file layout matches the client configuration files used by the
    /// other Jamf Pro SDKs:
    ///
    /// ```json
    /// {
    ///   "auth": { "token": "..." },
    ///   "environment": { "instance_name": "acme" },
    ///   "client_options": { "log_level": "LogLevelDebug", "hide_sensitive_data": true }
    /// }
    /// ```
    ///
    /// `auth` accepts either `token` or `username` + `password`;
    /// `environment` accepts either `instance_name` or `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] or [`ConfigError::ParseFile`] when the
    /// file cannot be loaded, and any validation error from the builder.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ParseFile {
                path: path.display().to_string(),
                source,
            })?;

        file.into_builder()?.build()
    }

    /// Returns the server base URL (without the `/JSSResource` path).
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the logging preference.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns whether request bodies are kept out of trace logs.
    #[must_use]
    pub const fn hide_sensitive_data(&self) -> bool {
        self.hide_sensitive_data
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify JamfConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JamfConfig>();
};

/// Builder for constructing [`JamfConfig`] instances.
///
/// Required: a server location (`instance_name` or `base_url`) and
/// `credentials`. If both locations are set, `base_url` wins.
///
/// # Defaults
///
/// - `log_level`: [`LogLevel::Warn`]
/// - `hide_sensitive_data`: `true`
/// - `user_agent_prefix`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct JamfConfigBuilder {
    instance_name: Option<InstanceName>,
    base_url: Option<BaseUrl>,
    credentials: Option<Credentials>,
    log_level: Option<LogLevel>,
    hide_sensitive_data: Option<bool>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl JamfConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the jamfcloud.com instance.
    #[must_use]
    pub fn instance_name(mut self, instance: InstanceName) -> Self {
        self.instance_name = Some(instance);
        self
    }

    /// Sets an explicit server URL, overriding any instance name.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the request credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the logging preference.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets whether request bodies are kept out of trace logs.
    #[must_use]
    pub const fn hide_sensitive_data(mut self, hide: bool) -> Self {
        self.hide_sensitive_data = Some(hide);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`JamfConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no server location or
    /// no credentials were provided.
    pub fn build(self) -> Result<JamfConfig, ConfigError> {
        let base_url = match (self.base_url, self.instance_name) {
            (Some(url), _) => url,
            (None, Some(instance)) => instance.base_url(),
            (None, None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "instance_name",
                })
            }
        };
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        Ok(JamfConfig {
            base_url,
            credentials,
            log_level: self.log_level.unwrap_or_default(),
            hide_sensitive_data: self.hide_sensitive_data.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    auth: AuthSection,
    environment: EnvironmentSection,
    #[serde(default)]
    client_options: ClientOptionsSection,
}

#[derive(Debug, Deserialize)]
struct AuthSection {
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnvironmentSection {
    instance_name: Option<String>,
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ClientOptionsSection {
    log_level: Option<LogLevel>,
    hide_sensitive_data: Option<bool>,
    user_agent_prefix: Option<String>,
    timeout_seconds: Option<u64>,
}

impl ConfigFile {
    fn into_builder(self) -> Result<JamfConfigBuilder, ConfigError> {
        let mut builder = JamfConfig::builder();

        if let Some(url) = self.environment.base_url.filter(|u| !u.is_empty()) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(name) = self.environment.instance_name.filter(|n| !n.is_empty()) {
            builder = builder.instance_name(InstanceName::new(name)?);
        }

        let credentials = match (self.auth.token, self.auth.username) {
            (Some(token), _) if !token.is_empty() => Credentials::Bearer(AccessToken::new(token)?),
            (_, Some(username)) => Credentials::basic(
                username,
                Password::new(self.auth.password.unwrap_or_default()),
            )?,
            _ => {
                return Err(ConfigError::MissingRequiredField {
                    field: "credentials",
                })
            }
        };
        builder = builder.credentials(credentials);

        let options = self.client_options;
        if let Some(level) = options.log_level {
            builder = builder.log_level(level);
        }
        if let Some(hide) = options.hide_sensitive_data {
            builder = builder.hide_sensitive_data(hide);
        }
        if let Some(prefix) = options.user_agent_prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        if let Some(seconds) = options.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(builder)
    }
}
