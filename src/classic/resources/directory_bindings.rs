//! Directory binding resource implementation.
//!
//! A directory binding tells enrolled Macs how to join a directory service
//! such as Active Directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::DirectoryBinding;
//!
//! let binding = DirectoryBinding {
//!     name: Some("Corp AD".to_string()),
//!     priority: Some(1),
//!     domain: Some("corp.example.com".to_string()),
//!     binding_type: Some("Active Directory".to_string()),
//!     ..Default::default()
//! };
//! let created = DirectoryBinding::create(&client, &binding).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::{ClassicResource, ResourceOperation, ResourcePath};
use crate::clients::HttpMethod;

/// A directory binding.
///
/// `password` is write-only; reads return it blank or omit it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DirectoryBinding {
    /// The unique identifier of the binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Order in which bindings are applied, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Account used to bind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Organizational unit computer records are created in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_ou: Option<String>,

    /// e.g. `Active Directory`, `Open Directory`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub binding_type: Option<String>,
}

impl ClassicResource for DirectoryBinding {
    type List = DirectoryBindingsList;

    const NAME: &'static str = "Directory Binding";
    const ROOT: &'static str = "directory_binding";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "directorybindings",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "directorybindings/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "directorybindings/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "directorybindings/id/0",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "directorybindings/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "directorybindings/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "directorybindings/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "directorybindings/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// Response body of `GET directorybindings`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DirectoryBindingsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "directory_binding", default)]
    pub directory_bindings: Vec<DirectoryBindingSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DirectoryBindingSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::codec::{from_xml, to_xml};

    #[test]
    fn test_directory_binding_serialization() {
        let binding = DirectoryBinding {
            name: Some("New Binding".to_string()),
            priority: Some(1),
            domain: Some("example.com".to_string()),
            computer_ou: Some("CN=Computers,DC=example,DC=com".to_string()),
            binding_type: Some("Active Directory".to_string()),
            ..Default::default()
        };

        let xml = to_xml(DirectoryBinding::ROOT, &binding).unwrap();

        assert!(xml.starts_with("<directory_binding><name>New Binding</name><priority>1</priority>"));
        assert!(xml.contains("<computer_ou>CN=Computers,DC=example,DC=com</computer_ou>"));
        assert!(xml.contains("<type>Active Directory</type>"));
        assert!(!xml.contains("<password>"));
        assert!(!xml.contains("<id>"));
    }

    #[test]
    fn test_directory_binding_deserialization() {
        let xml = "<directory_binding><id>2</id><name>Corp</name><priority>1</priority>\
            <domain>corp.example.com</domain><username>binder</username>\
            <type>Active Directory</type></directory_binding>";

        let binding: DirectoryBinding = from_xml(xml).unwrap();

        assert_eq!(binding.get_id(), Some(2));
        assert_eq!(binding.priority, Some(1));
        assert_eq!(binding.binding_type.as_deref(), Some("Active Directory"));
        assert!(binding.password.is_none());
    }

    #[test]
    fn test_directory_bindings_list_deserialization() {
        let list: DirectoryBindingsList = from_xml(
            "<directory_bindings><size>1</size>\
             <directory_binding><id>2</id><name>Corp</name></directory_binding>\
             </directory_bindings>",
        )
        .unwrap();

        assert_eq!(list.directory_bindings[0].name, "Corp");
    }
}
