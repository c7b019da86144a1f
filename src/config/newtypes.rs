//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Jamf Pro bearer token.
///
/// The token is issued out of band (API client credentials or the
/// `/api/v1/auth/token` endpoint); the SDK only attaches it to requests.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use jamfpro::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A password for basic credentials, masked in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password. Empty passwords are accepted; the server decides.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated jamfcloud.com instance name.
///
/// # Accepted Formats
///
/// - `acme` - normalized to `acme.jamfcloud.com`
/// - `acme.jamfcloud.com` - used as-is
///
/// # Example
///
/// ```rust
/// use jamfpro::InstanceName;
///
/// let instance = InstanceName::new("acme").unwrap();
/// assert_eq!(instance.as_ref(), "acme.jamfcloud.com");
/// assert_eq!(instance.name(), "acme");
/// assert_eq!(instance.base_url().as_ref(), "https://acme.jamfcloud.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceName {
    full_domain: String,
    name_end: usize,
}

impl InstanceName {
    const SUFFIX: &'static str = ".jamfcloud.com";

    /// Creates a new validated instance name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInstanceName`] if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim().to_lowercase();

        if name.is_empty() {
            return Err(ConfigError::InvalidInstanceName { name });
        }

        let (short, full_domain) = if let Some(short) = name.strip_suffix(Self::SUFFIX) {
            (short.to_string(), name)
        } else if name.contains('.') {
            return Err(ConfigError::InvalidInstanceName { name });
        } else {
            (name.clone(), format!("{}{}", name, Self::SUFFIX))
        };

        if !Self::is_valid_label(&short) {
            return Err(ConfigError::InvalidInstanceName { name: full_domain });
        }

        Ok(Self {
            name_end: short.len(),
            full_domain,
        })
    }

    /// Returns the subdomain portion, e.g. `acme` for `acme.jamfcloud.com`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.full_domain[..self.name_end]
    }

    /// Returns the `https://` base URL of this instance.
    #[must_use]
    pub fn base_url(&self) -> BaseUrl {
        BaseUrl {
            url: format!("https://{}", self.full_domain),
            scheme_end: "https".len(),
            host_start: "https://".len(),
            host_end: "https://".len() + self.full_domain.len(),
        }
    }

    fn is_valid_label(label: &str) -> bool {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }

        label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for InstanceName {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl Serialize for InstanceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for InstanceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated server base URL, e.g. `https://jamf.example.com:8443`.
///
/// Used for on-premise servers and for pointing the client at a mock server.
/// Trailing slashes are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use jamfpro::BaseUrl;
///
/// let url = BaseUrl::new("https://jamf.example.com:8443/").unwrap();
/// assert_eq!(url.as_ref(), "https://jamf.example.com:8443");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("jamf.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
