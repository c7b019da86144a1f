//! HTTP client for Jamf Pro Classic API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used in production.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{Credentials, JamfConfig};

/// Base path of every Classic API endpoint.
pub const CLASSIC_API_BASE_PATH: &str = "/JSSResource";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest error excerpt kept from a non-HTML error body.
const MAX_ERROR_EXCERPT: usize = 256;

/// HTTP client for making requests to the Jamf Pro Classic API.
///
/// The client handles:
/// - Base URI construction from the configured instance or base URL
/// - Default headers including User-Agent and `Accept: application/xml`
/// - Bearer or basic credentials on every request
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// Each call is exactly one round trip; there is no retry.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use jamfpro::{JamfConfig, HttpClient, InstanceName, AccessToken, Credentials};
/// use jamfpro::clients::{HttpRequest, HttpMethod, Transport};
///
/// let config = JamfConfig::builder()
///     .instance_name(InstanceName::new("acme")?)
///     .credentials(Credentials::Bearer(AccessToken::new("token")?))
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "printers").build()?;
/// let response = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://acme.jamfcloud.com`).
    base_uri: String,
    /// Base path (`/JSSResource`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    credentials: Credentials,
    hide_sensitive_data: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &JamfConfig) -> Result<Self, HttpError> {
        let base_uri = config.base_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}jamfpro-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/xml".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        tracing::debug!(
            base_uri = %base_uri,
            log_level = %config.log_level(),
            "Jamf Pro HTTP client initialised"
        );

        Ok(Self {
            client,
            base_uri,
            base_path: CLASSIC_API_BASE_PATH.to_string(),
            default_headers,
            credentials: config.credentials().clone(),
            hide_sensitive_data: config.hide_sensitive_data(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request to the Jamf Pro server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = match &self.credentials {
            Credentials::Bearer(token) => req_builder.bearer_auth(token.as_ref()),
            Credentials::Basic { username, password } => {
                req_builder.basic_auth(username, Some(password.as_ref()))
            }
        };

        if let Some(body) = &request.body {
            if !self.hide_sensitive_data {
                tracing::trace!(path = %request.path, body = %body, "request body");
            }
            req_builder = req_builder.body(body.clone());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        // Reading the body to the end releases the connection on every path.
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            request_id = response.request_id(),
            "received response"
        );

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: summarize_error_body(code, &response.body),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}

/// Extracts a readable message from a Classic API error body.
///
/// Jamf Pro returns an HTML status page whose `<p>` elements carry the
/// message; anything else is trimmed and truncated. An empty body falls back
/// to the canonical reason phrase of the status code.
pub(crate) fn summarize_error_body(code: u16, body: &str) -> String {
    let paragraphs: Vec<&str> = body
        .split("<p>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</p>").next())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();

    if !paragraphs.is_empty() {
        return paragraphs.join(" ");
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string();
    }

    trimmed.chars().take(MAX_ERROR_EXCERPT).collect()
}
