//! Classic API resource infrastructure for Jamf Pro.
//!
//! This module provides:
//!
//! - **[`ClassicResource`] trait**: generic list/get/create/update/delete
//!   accessors driven by a per-resource path table
//! - **Path building**: [`ResourcePath`], [`get_path`] and [`build_path`]
//! - **[`ResourceError`]**: errors that carry the resource and operation
//! - **[`codec`]**: XML encoding and decoding of payloads
//! - **[`resources`]**: the concrete resources (scripts, printers, accounts, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::{HttpClient, JamfConfig};
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::{Script, DockItem};
//!
//! let config = JamfConfig::from_file("clientconfig.json")?;
//! let client = HttpClient::new(&config)?;
//!
//! let scripts = Script::list(&client).await?;
//! for summary in &scripts.scripts {
//!     println!("{:?}: {:?}", summary.id, summary.name);
//! }
//!
//! let mut dock_item = DockItem::get_by_name(&client, "Safari").await?;
//! dock_item.path = Some("file://localhost/Applications/Safari.app/".to_string());
//! DockItem::update_by_name(&client, "Safari", &dock_item).await?;
//!
//! DockItem::delete_by_id(&client, 12).await?;
//! ```

pub mod codec;
mod errors;
mod path;
mod resource;
pub mod resources;
mod shared;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::ClassicResource;
pub use shared::{CategoryRef, SiteRef};
