//! Personal device (BYO) profile resource implementation.
//!
//! Everything about a BYO profile lives under its `general` element,
//! including the site it belongs to.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::{ByoProfile, ByoProfileGeneral};
//!
//! let profile = ByoProfile {
//!     general: Some(ByoProfileGeneral {
//!         name: Some("Personal Device Profile".to_string()),
//!         enabled: Some(true),
//!         description: Some("Used for Android or iOS BYO device enrollments".to_string()),
//!         ..Default::default()
//!     }),
//! };
//! ByoProfile::update_by_name(&client, "Personal Device Profile", &profile).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::shared::default_site;
use crate::classic::{ClassicResource, ResourceOperation, ResourcePath, SiteRef};
use crate::clients::HttpMethod;

/// A personal device profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ByoProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<ByoProfileGeneral>,
}

/// The `general` section of a [`ByoProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ByoProfileGeneral {
    /// The unique identifier of the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassicResource for ByoProfile {
    type List = ByoProfilesList;

    const NAME: &'static str = "BYO Profile";
    const ROOT: &'static str = "byoprofile";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "byoprofiles"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "byoprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "byoprofiles/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "byoprofiles/id/0",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "byoprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "byoprofiles/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "byoprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "byoprofiles/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.general.as_ref().and_then(|general| general.id)
    }

    fn apply_create_defaults(&mut self) {
        let general = self.general.get_or_insert_with(ByoProfileGeneral::default);
        default_site(&mut general.site);
    }
}

/// Response body of `GET byoprofiles`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ByoProfilesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "byoprofile", default)]
    pub byo_profiles: Vec<ByoProfileSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ByoProfileSummary {
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
    fn test_byo_profile_nests_general() {
        let profile = ByoProfile {
            general: Some(ByoProfileGeneral {
                name: Some("BYOD".to_string()),
                enabled: Some(true),
                ..Default::default()
            }),
        };

        let xml = to_xml(ByoProfile::ROOT, &profile).unwrap();

        assert_eq!(
            xml,
            "<byoprofile><general><name>BYOD</name><enabled>true</enabled></general></byoprofile>"
        );
    }

    #[test]
    fn test_get_id_reads_general_id() {
        let profile: ByoProfile =
            from_xml("<byoprofile><general><id>9</id><name>BYOD</name></general></byoprofile>")
                .unwrap();

        assert_eq!(profile.get_id(), Some(9));
        assert_eq!(ByoProfile::default().get_id(), None);
    }

    #[test]
    fn test_create_defaults_site_inside_general() {
        let mut profile = ByoProfile {
            general: Some(ByoProfileGeneral {
                name: Some("BYOD".to_string()),
                site: Some(SiteRef::default()),
                ..Default::default()
            }),
        };

        profile.apply_create_defaults();

        assert_eq!(profile.general.unwrap().site, Some(SiteRef::none()));
    }

    #[test]
    fn test_create_defaults_creates_general_when_missing() {
        let mut profile = ByoProfile::default();

        profile.apply_create_defaults();

        assert_eq!(profile.general.unwrap().site, Some(SiteRef::none()));
    }

    #[test]
    fn test_byo_profiles_list_deserialization() {
        let list: ByoProfilesList = from_xml(
            "<byoprofiles><size>1</size><byoprofile><id>1</id><name>BYOD</name></byoprofile>\
             </byoprofiles>",
        )
        .unwrap();

        assert_eq!(list.size, 1);
        assert_eq!(list.byo_profiles[0].name, "BYOD");
    }
}
