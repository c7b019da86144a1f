//! # Jamf Pro API Rust SDK
//!
//! A Rust SDK for the Jamf Pro Classic API, providing type-safe
//! configuration, an async HTTP transport and generic CRUD accessors for
//! Classic API resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`JamfConfig`] and [`JamfConfigBuilder`]
//! - Validated newtypes for server locations and credentials
//! - Loading configuration from a JSON client configuration file
//! - An async HTTP client behind the [`Transport`] trait
//! - The [`ClassicResource`](classic::ClassicResource) trait: list, get,
//!   create, update and delete for every resource through one code path
//! - Resource shapes for scripts, printers, accounts, dock items and more in
//!   [`classic::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jamfpro::{JamfConfig, InstanceName, AccessToken, Credentials, LogLevel};
//!
//! let config = JamfConfig::builder()
//!     .instance_name(InstanceName::new("acme").unwrap())
//!     .credentials(Credentials::Bearer(AccessToken::new("token").unwrap()))
//!     .log_level(LogLevel::Info)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://acme.jamfcloud.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use jamfpro::{HttpClient, JamfConfig};
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::{Account, AccountGroupRef, AccountGroups};
//!
//! let config = JamfConfig::from_file("clientconfig.json")?;
//! let client = HttpClient::new(&config)?;
//!
//! let account = Account {
//!     name: Some("Barry White".to_string()),
//!     access_level: Some("Group Access".to_string()),
//!     privilege_set: Some("Custom".to_string()),
//!     groups: Some(AccountGroups::from(vec![AccountGroupRef::new(195, "standard-group")])),
//!     ..Default::default()
//! };
//!
//! // No site given: the "no site" sentinel is sent.
//! let created = Account::create(&client, &account).await?;
//! let fetched = Account::get_by_id(&client, created.id.unwrap_or_default()).await?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits `tracing` events and never installs a subscriber. Request
//! and response bodies are only traced when
//! [`JamfConfig::hide_sensitive_data`] is `false`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round trip per call**: No hidden retries or pagination

pub mod classic;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, BaseUrl, Credentials, InstanceName, JamfConfig, JamfConfigBuilder, LogLevel,
    Password,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Transport,
};

// Re-export resource infrastructure
pub use classic::{ClassicResource, ResourceError, ResourceOperation, SiteRef};
