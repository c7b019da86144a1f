//! Dock item resource implementation.
//!
//! Dock items are apps, files or folders Jamf Pro can add to or remove from
//! the Dock of managed computers.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::DockItem;
//!
//! let item = DockItem {
//!     name: Some("Safari".to_string()),
//!     item_type: Some("App".to_string()),
//!     path: Some("file://localhost/Applications/Safari.app/".to_string()),
//!     ..Default::default()
//! };
//! DockItem::update_by_name(&client, "Safari", &item).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::{ClassicResource, ResourceOperation, ResourcePath};
use crate::clients::HttpMethod;

/// A Dock item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DockItem {
    /// The unique identifier of the dock item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `App`, `File` or `Folder`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// `file://` URL of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl ClassicResource for DockItem {
    type List = DockItemsList;

    const NAME: &'static str = "Dock Item";
    const ROOT: &'static str = "dock_item";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "dockitems"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "dockitems/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "dockitems/name/{name}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "dockitems/id/0"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "dockitems/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "dockitems/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "dockitems/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "dockitems/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// Response body of `GET dockitems`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DockItemsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "dock_item", default)]
    pub dock_items: Vec<DockItemSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DockItemSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::codec::{from_xml, to_xml};
    use crate::classic::get_path;

    #[test]
    fn test_dock_item_type_element() {
        let item = DockItem {
            name: Some("Safari".to_string()),
            item_type: Some("App".to_string()),
            ..Default::default()
        };

        let xml = to_xml(DockItem::ROOT, &item).unwrap();
        assert_eq!(xml, "<dock_item><name>Safari</name><type>App</type></dock_item>");

        let decoded: DockItem = from_xml(&xml).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_dock_items_list_deserialization() {
        let xml = "<dock_items><size>1</size>\
            <dock_item><id>4</id><name>Safari</name></dock_item></dock_items>";

        let list: DockItemsList = from_xml(xml).unwrap();

        assert_eq!(list.size, 1);
        assert_eq!(list.dock_items[0].id, 4);
    }

    #[test]
    fn test_dock_item_paths() {
        let create = get_path(DockItem::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.template, "dockitems/id/0");

        let by_name = get_path(DockItem::PATHS, ResourceOperation::GetByName, &["name"]).unwrap();
        assert_eq!(by_name.template, "dockitems/name/{name}");
    }

    #[test]
    fn test_dock_item_constants() {
        assert_eq!(DockItem::NAME, "Dock Item");
        assert_eq!(DockItem::ROOT, "dock_item");
    }
}
