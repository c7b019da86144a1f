//! Path building infrastructure for Classic API resources.
//!
//! Every resource declares a const table of [`ResourcePath`]s: one entry per
//! operation it supports, with the URL template relative to `/JSSResource`.
//! An operation missing from the table is unsupported by that resource and
//! fails before any request is sent.
//!
//! # Path Resolution
//!
//! Lookups are keyed by the identifiers the caller has. A resource can offer
//! several lookups for one operation (e.g., a computer invitation by `id` or
//! by `invitation`); [`get_path`] picks the entry whose identifiers are all
//! available, preferring the most specific.
//!
//! # Example
//!
//! ```rust
//! use jamfpro::classic::{ResourcePath, ResourceOperation, get_path, build_path};
//! use jamfpro::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "scripts"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::GetById, &["id"], "scripts/id/{id}"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::GetByName, &["name"], "scripts/name/{name}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::GetByName, &["name"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("name", "Install Rosetta");
//! assert_eq!(build_path(path.template, &ids), "scripts/name/Install%20Rosetta");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Operations an accessor can perform against a Classic API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List the collection (`GET <collection>`).
    List,
    /// Fetch one record by numeric ID.
    GetById,
    /// Fetch one record by display name.
    GetByName,
    /// Fetch one record by a resource-specific key (e.g., invitation code).
    GetByKey,
    /// Create a record (`POST` to the resource's create endpoint).
    Create,
    /// Replace a record addressed by numeric ID.
    UpdateById,
    /// Replace a record addressed by display name.
    UpdateByName,
    /// Delete a record addressed by numeric ID.
    DeleteById,
    /// Delete a record addressed by display name.
    DeleteByName,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::GetById | Self::GetByName | Self::GetByKey => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::UpdateById | Self::UpdateByName => HttpMethod::Put,
            Self::DeleteById | Self::DeleteByName => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::GetById => "get_by_id",
            Self::GetByName => "get_by_name",
            Self::GetByKey => "get_by_key",
            Self::Create => "create",
            Self::UpdateById => "update_by_id",
            Self::UpdateByName => "update_by_name",
            Self::DeleteById => "delete_by_id",
            Self::DeleteByName => "delete_by_name",
        }
    }

    /// Returns `true` if the operation sends a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Create | Self::UpdateById | Self::UpdateByName)
    }
}

impl Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path configuration for one resource operation.
///
/// # Path Templates
///
/// Templates use `{key}` placeholders for identifier interpolation:
/// - `printers/id/{id}` - numeric ID
/// - `printers/name/{name}` - display name, percent-encoded when built
/// - `printers/id/0` - fixed create endpoint, no placeholder
///
/// # Example
///
/// ```rust
/// use jamfpro::classic::{ResourcePath, ResourceOperation};
/// use jamfpro::HttpMethod;
///
/// const ACCOUNT_BY_NAME: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::GetByName,
///     &["name"],
///     "accounts/username/{name}",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Identifier names the template needs.
    pub ids: &'static [&'static str],
    /// The URL template relative to `/JSSResource`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of identifiers this path needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required identifiers are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Paths are filtered by operation and by identifier availability; among the
/// remaining ones the path needing the most identifiers wins.
///
/// Returns `None` when the resource does not support the operation with the
/// identifiers at hand.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating identifiers.
///
/// Every value is percent-encoded, so names containing spaces, slashes or
/// other reserved characters address a single path segment.
///
/// # Example
///
/// ```rust
/// use jamfpro::classic::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", 42);
/// assert_eq!(build_path("dockitems/id/{id}", &ids), "dockitems/id/42");
///
/// let mut names = HashMap::new();
/// names.insert("name", "HR/Finance");
/// assert_eq!(build_path("dockitems/name/{name}", &names), "dockitems/name/HR%2FFinance");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
