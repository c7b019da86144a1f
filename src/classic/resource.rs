//! The `ClassicResource` trait: generic CRUD accessors for Classic API
//! resources.
//!
//! A resource type declares its display name, XML root element and path
//! table; the trait's default methods provide every accessor on top of those.
//! Each accessor performs exactly one round trip through a [`Transport`].
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use jamfpro::classic::{ClassicResource, ResourcePath, ResourceOperation};
//! use jamfpro::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Building {
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     pub id: Option<i64>,
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//!
//! impl ClassicResource for Building {
//!     type List = BuildingsList;
//!
//!     const NAME: &'static str = "Building";
//!     const ROOT: &'static str = "building";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "buildings"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::GetById, &["id"], "buildings/id/{id}"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "buildings/id/0"),
//!     ];
//!
//!     fn get_id(&self) -> Option<i64> {
//!         self.id
//!     }
//! }
//!
//! let buildings = Building::list(&client).await?;
//! let building = Building::get_by_id(&client, 3).await?;
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::classic::codec;
use crate::classic::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};
use crate::clients::{
    summarize_error_body, DataType, HttpError, HttpRequest, HttpResponse, HttpResponseError,
    Transport,
};

/// A Jamf Pro Classic API resource with generic CRUD accessors.
///
/// # Associated Types
///
/// - `List`: the collection shape returned by [`list`](Self::list), usually
///   a size element followed by summary entries
///
/// # Associated Constants
///
/// - `NAME`: human-readable name used in errors and logs (e.g., "Dock Item")
/// - `ROOT`: the XML root element of a single record (e.g., `dock_item`)
/// - `PATHS`: one [`ResourcePath`] per supported operation
///
/// Operations missing from `PATHS` fail with
/// [`ResourceError::PathResolutionFailed`] without touching the network.
///
/// # Writes
///
/// Create and update encode the whole record; fields left `None` are omitted
/// from the body. The server's reply is decoded into the detail shape, which
/// for most resources carries only the assigned `id`.
#[allow(async_fn_in_trait)]
pub trait ClassicResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The collection shape returned by [`list`](Self::list).
    type List: DeserializeOwned + Send;

    /// Human-readable resource name (e.g., "Computer Invitation").
    const NAME: &'static str;

    /// XML root element of a single record (e.g., `computer_invitation`).
    const ROOT: &'static str;

    /// Path table, one entry per supported operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the record's ID, if it has one.
    fn get_id(&self) -> Option<i64>;

    /// Fills server-required defaults before a create.
    ///
    /// Resources that belong to a site replace a missing or unset site with
    /// the "no site" sentinel here. The default does nothing.
    fn apply_create_defaults(&mut self) {}

    /// Lists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body does not
    /// match [`Self::List`].
    async fn list<C: Transport>(client: &C) -> Result<Self::List, ResourceError> {
        let operation = ResourceOperation::List;
        let response = execute::<Self, C>(client, operation, &HashMap::new(), None).await?;
        decode::<Self, Self::List>(operation, &response)
    }

    /// Fetches one record by numeric ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] with status 404 if no record has
    /// this ID.
    async fn get_by_id<C: Transport>(client: &C, id: i64) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::GetById;
        let ids = HashMap::from([("id", id.to_string())]);
        let response = execute::<Self, C>(client, operation, &ids, None).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Fetches one record by display name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] with status 404 if no record has
    /// this name.
    async fn get_by_name<C: Transport>(client: &C, name: &str) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::GetByName;
        let ids = HashMap::from([("name", name.to_string())]);
        let response = execute::<Self, C>(client, operation, &ids, None).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Fetches one record by a resource-specific lookup key.
    ///
    /// `key` names the identifier in the path table (e.g., `invitation`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// lookup for `key`.
    async fn get_by_key<C: Transport>(
        client: &C,
        key: &str,
        value: &str,
    ) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::GetByKey;
        let ids = HashMap::from([(key, value.to_string())]);
        let response = execute::<Self, C>(client, operation, &ids, None).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Creates a record.
    ///
    /// The record is copied and passed through
    /// [`apply_create_defaults`](Self::apply_create_defaults) before encoding;
    /// `resource` itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if encoding, the request or decoding fails.
    async fn create<C: Transport>(client: &C, resource: &Self) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::Create;
        let mut payload = resource.clone();
        payload.apply_create_defaults();
        let body = encode::<Self>(operation, &payload)?;
        let response = execute::<Self, C>(client, operation, &HashMap::new(), Some(body)).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Replaces the record with numeric ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if encoding, the request or decoding fails.
    async fn update_by_id<C: Transport>(
        client: &C,
        id: i64,
        resource: &Self,
    ) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::UpdateById;
        let ids = HashMap::from([("id", id.to_string())]);
        let body = encode::<Self>(operation, resource)?;
        let response = execute::<Self, C>(client, operation, &ids, Some(body)).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Replaces the record named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if encoding, the request or decoding fails.
    async fn update_by_name<C: Transport>(
        client: &C,
        name: &str,
        resource: &Self,
    ) -> Result<Self, ResourceError> {
        let operation = ResourceOperation::UpdateByName;
        let ids = HashMap::from([("name", name.to_string())]);
        let body = encode::<Self>(operation, resource)?;
        let response = execute::<Self, C>(client, operation, &ids, Some(body)).await?;
        decode::<Self, Self>(operation, &response)
    }

    /// Deletes the record with numeric ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    async fn delete_by_id<C: Transport>(client: &C, id: i64) -> Result<(), ResourceError> {
        let ids = HashMap::from([("id", id.to_string())]);
        execute::<Self, C>(client, ResourceOperation::DeleteById, &ids, None).await?;
        Ok(())
    }

    /// Deletes the record named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    async fn delete_by_name<C: Transport>(client: &C, name: &str) -> Result<(), ResourceError> {
        let ids = HashMap::from([("name", name.to_string())]);
        execute::<Self, C>(client, ResourceOperation::DeleteByName, &ids, None).await?;
        Ok(())
    }
}

/// Resolves the path, sends one request and checks the status code.
async fn execute<R: ClassicResource, C: Transport>(
    client: &C,
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
    body: Option<String>,
) -> Result<HttpResponse, ResourceError> {
    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation,
        },
    )?;

    let url = build_path(path.template, ids);
    let transport_error = |source: HttpError| ResourceError::Transport {
        resource: R::NAME,
        operation,
        source,
    };

    let mut builder = HttpRequest::builder(path.http_method, url);
    if let Some(body) = body {
        builder = builder.body(body).body_type(DataType::Xml);
    }
    let request = builder
        .build()
        .map_err(|e| transport_error(HttpError::InvalidRequest(e)))?;

    tracing::debug!(
        resource = R::NAME,
        operation = %operation,
        path = %request.path,
        "executing classic api call"
    );

    let response = client.send(request).await.map_err(transport_error)?;

    if !response.is_ok() {
        return Err(transport_error(HttpError::Response(HttpResponseError {
            code: response.code,
            message: summarize_error_body(response.code, &response.body),
        })));
    }

    Ok(response)
}

fn encode<R: ClassicResource>(
    operation: ResourceOperation,
    resource: &R,
) -> Result<String, ResourceError> {
    codec::to_xml(R::ROOT, resource).map_err(|source| ResourceError::Encode {
        resource: R::NAME,
        operation,
        source,
    })
}

fn decode<R: ClassicResource, T: DeserializeOwned>(
    operation: ResourceOperation,
    response: &HttpResponse,
) -> Result<T, ResourceError> {
    codec::from_xml(&response.body).map_err(|source| ResourceError::Decode {
        resource: R::NAME,
        operation,
        source,
    })
}
