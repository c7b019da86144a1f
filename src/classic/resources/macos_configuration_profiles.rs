//! macOS configuration profile resource implementation.
//!
//! The Classic API calls these `osxconfigurationprofiles`. The profile's
//! settings travel as an escaped property list in `general.payloads`.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::MacOsConfigurationProfile;
//!
//! let profiles = MacOsConfigurationProfile::list(&client).await?;
//! for summary in &profiles.profiles {
//!     let profile = MacOsConfigurationProfile::get_by_id(&client, summary.id).await?;
//!     if let Some(plist) = profile.payloads() {
//!         std::fs::write(format!("{}.mobileconfig", summary.name), plist)?;
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::shared::default_site;
use crate::classic::{CategoryRef, ClassicResource, ResourceOperation, ResourcePath, SiteRef};
use crate::clients::HttpMethod;

/// A macOS configuration profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MacOsConfigurationProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<ProfileGeneral>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ProfileScope>,
}

/// The `general` section of a [`MacOsConfigurationProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileGeneral {
    /// The unique identifier of the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    /// `Install Automatically` or `Make Available in Self Service`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_removable: Option<bool>,

    /// `System` or `User`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// `Newly Assigned` or `All`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeploy_on_update: Option<String>,

    /// The profile's property list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payloads: Option<String>,
}

/// Deployment targets of a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_computers: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_jss_users: Option<bool>,
}

impl MacOsConfigurationProfile {
    /// Returns the profile's property list, ready to save as a
    /// `.mobileconfig` file.
    #[must_use]
    pub fn payloads(&self) -> Option<&str> {
        self.general
            .as_ref()
            .and_then(|general| general.payloads.as_deref())
            .filter(|payloads| !payloads.trim().is_empty())
    }
}

impl ClassicResource for MacOsConfigurationProfile {
    type List = MacOsConfigurationProfilesList;

    const NAME: &'static str = "macOS Configuration Profile";
    const ROOT: &'static str = "os_x_configuration_profile";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "osxconfigurationprofiles",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "osxconfigurationprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "osxconfigurationprofiles/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "osxconfigurationprofiles/id/0",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "osxconfigurationprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "osxconfigurationprofiles/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "osxconfigurationprofiles/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "osxconfigurationprofiles/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.general.as_ref().and_then(|general| general.id)
    }

    fn apply_create_defaults(&mut self) {
        let general = self.general.get_or_insert_with(ProfileGeneral::default);
        default_site(&mut general.site);
    }
}

/// Response body of `GET osxconfigurationprofiles`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct MacOsConfigurationProfilesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "os_x_configuration_profile", default)]
    pub profiles: Vec<MacOsConfigurationProfileSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct MacOsConfigurationProfileSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::codec::{from_xml, to_xml};

    const PLIST: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><plist version=\"1\">\
        <dict><key>PayloadDisplayName</key><string>Wi-Fi</string></dict></plist>\n";

    #[test]
    fn test_payloads_survive_escaping() {
        let profile = MacOsConfigurationProfile {
            general: Some(ProfileGeneral {
                name: Some("Wi-Fi".to_string()),
                payloads: Some(PLIST.to_string()),
                ..Default::default()
            }),
            scope: None,
        };

        let xml = to_xml(MacOsConfigurationProfile::ROOT, &profile).unwrap();
        assert!(xml.contains("&lt;plist"));

        let decoded: MacOsConfigurationProfile = from_xml(&xml).unwrap();
        assert_eq!(decoded.payloads(), Some(PLIST));
    }

    #[test]
    fn test_payloads_missing_or_blank() {
        assert_eq!(MacOsConfigurationProfile::default().payloads(), None);

        let blank = MacOsConfigurationProfile {
            general: Some(ProfileGeneral {
                payloads: Some("  ".to_string()),
                ..Default::default()
            }),
            scope: None,
        };
        assert_eq!(blank.payloads(), None);
    }

    #[test]
    fn test_profile_detail_deserialization() {
        let xml = "<os_x_configuration_profile><general><id>14</id><name>Wi-Fi</name>\
            <site><id>-1</id><name>None</name></site>\
            <category><id>3</id><name>Network</name></category>\
            <distribution_method>Install Automatically</distribution_method>\
            <user_removable>false</user_removable><level>System</level>\
            <redeploy_on_update>Newly Assigned</redeploy_on_update></general>\
            <scope><all_computers>true</all_computers><all_jss_users>false</all_jss_users></scope>\
            </os_x_configuration_profile>";

        let profile: MacOsConfigurationProfile = from_xml(xml).unwrap();

        assert_eq!(profile.get_id(), Some(14));
        let general = profile.general.as_ref().unwrap();
        assert_eq!(general.category, Some(CategoryRef::new(3, "Network")));
        assert_eq!(general.level.as_deref(), Some("System"));
        assert_eq!(profile.scope.unwrap().all_computers, Some(true));
    }

    #[test]
    fn test_create_defaults_site_inside_general() {
        let mut profile = MacOsConfigurationProfile {
            general: Some(ProfileGeneral {
                name: Some("Wi-Fi".to_string()),
                site: Some(SiteRef::new(5, "Tokyo")),
                ..Default::default()
            }),
            scope: None,
        };

        profile.apply_create_defaults();
        assert_eq!(
            profile.general.as_ref().unwrap().site,
            Some(SiteRef::new(5, "Tokyo"))
        );

        let mut bare = MacOsConfigurationProfile::default();
        bare.apply_create_defaults();
        assert_eq!(bare.general.unwrap().site, Some(SiteRef::none()));
    }

    #[test]
    fn test_profiles_list_deserialization() {
        let list: MacOsConfigurationProfilesList = from_xml(
            "<os_x_configuration_profiles><size>2</size>\
             <os_x_configuration_profile><id>14</id><name>Wi-Fi</name></os_x_configuration_profile>\
             <os_x_configuration_profile><id>15</id><name>VPN</name></os_x_configuration_profile>\
             </os_x_configuration_profiles>",
        )
        .unwrap();

        assert_eq!(list.size, 2);
        assert_eq!(list.profiles[1].name, "VPN");
    }
}
