//! Computer invitation resource implementation.
//!
//! Computer invitations are the codes a Mac uses to enroll through
//! `jamf enroll` or the enrollment portal. The Classic API can list, fetch,
//! create and delete them by ID but not edit or address them by name; those
//! operations fail with
//! [`ResourceError::PathResolutionFailed`](crate::classic::ResourceError).
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::ComputerInvitation;
//!
//! let invitation = ComputerInvitation {
//!     invitation_type: Some("DEFAULT".to_string()),
//!     expiration_date: Some("2030-12-31 23:59:59".to_string()),
//!     multiple_users_allowed: Some(true),
//!     ..Default::default()
//! };
//! let created = ComputerInvitation::create(&client, &invitation).await?;
//!
//! let by_code = ComputerInvitation::get_by_invitation(&client, "107716249").await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::shared::default_site;
use crate::classic::{ClassicResource, ResourceError, ResourceOperation, ResourcePath, SiteRef};
use crate::clients::{HttpMethod, Transport};

/// A computer enrollment invitation.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `invitation`, `invitation_status`, `times_used`
/// - `expiration_date_utc`, `expiration_date_epoch`
///
/// ## Writable Fields
/// - `invitation_type`, `expiration_date`, `multiple_users_allowed`
/// - `ssh_username`, `ssh_password`, `create_account_if_does_not_exist`,
///   `hide_account`, `lock_down_ssh`
/// - `enroll_into_site`, `keep_existing_site_membership`, `site`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ComputerInvitation {
    /// The unique identifier of the invitation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The invitation code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation: Option<String>,

    /// `USED` or `UNUSED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_status: Option<String>,

    /// `DEFAULT`, `URL` or `EMAIL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_type: Option<String>,

    /// Expiration in server local time (`yyyy-MM-dd HH:mm:ss`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date_utc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date_epoch: Option<i64>,

    /// Local admin account the enrolled Mac is managed with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_password: Option<String>,

    /// Whether the code can enroll more than one computer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_users_allowed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_used: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_account_if_does_not_exist: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_account: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_down_ssh: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_user_uuid: Option<String>,

    /// Site enrolled computers are assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enroll_into_site: Option<SiteRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_existing_site_membership: Option<bool>,

    /// Site the invitation itself belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteRef>,
}

impl ClassicResource for ComputerInvitation {
    type List = ComputerInvitationsList;

    const NAME: &'static str = "Computer Invitation";
    const ROOT: &'static str = "computer_invitation";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "computerinvitations",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "computerinvitations/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByKey,
            &["invitation"],
            "computerinvitations/invitation/{invitation}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "computerinvitations/id/0",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "computerinvitations/id/{id}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }

    fn apply_create_defaults(&mut self) {
        default_site(&mut self.site);
    }
}

impl ComputerInvitation {
    /// Fetches an invitation by its invitation code.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] with status 404 if the code is
    /// unknown.
    pub async fn get_by_invitation<C: Transport>(
        client: &C,
        invitation: &str,
    ) -> Result<Self, ResourceError> {
        Self::get_by_key(client, "invitation", invitation).await
    }
}

/// Response body of `GET computerinvitations`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ComputerInvitationsList {
    /// Number of invitations reported by the server.
    #[serde(default)]
    pub size: i64,

    /// Invitation summaries.
    #[serde(rename = "computer_invitation", default)]
    pub computer_invitations: Vec<ComputerInvitationSummary>,
}

/// One entry of [`ComputerInvitationsList`].
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ComputerInvitationSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub invitation: Option<String>,
    #[serde(default)]
    pub invitation_type: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub expiration_date_utc: Option<String>,
    #[serde(default)]
    pub expiration_date_epoch: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::codec::{from_xml, to_xml};
    use crate::classic::get_path;

    #[test]
    fn test_computer_invitation_paths() {
        let list = get_path(ComputerInvitation::PATHS, ResourceOperation::List, &[]).unwrap();
        assert_eq!(list.template, "computerinvitations");

        let create = get_path(ComputerInvitation::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.template, "computerinvitations/id/0");
        assert_eq!(create.http_method, HttpMethod::Post);

        let by_code = get_path(
            ComputerInvitation::PATHS,
            ResourceOperation::GetByKey,
            &["invitation"],
        )
        .unwrap();
        assert_eq!(by_code.template, "computerinvitations/invitation/{invitation}");
    }

    #[test]
    fn test_computer_invitation_has_no_update_or_name_paths() {
        assert!(
            get_path(ComputerInvitation::PATHS, ResourceOperation::UpdateById, &["id"]).is_none()
        );
        assert!(get_path(
            ComputerInvitation::PATHS,
            ResourceOperation::UpdateByName,
            &["name"]
        )
        .is_none());
        assert!(
            get_path(ComputerInvitation::PATHS, ResourceOperation::GetByName, &["name"]).is_none()
        );
    }

    #[test]
    fn test_create_defaults_fill_site_only() {
        let mut invitation = ComputerInvitation {
            invitation_type: Some("DEFAULT".to_string()),
            ..Default::default()
        };

        invitation.apply_create_defaults();

        assert_eq!(invitation.site, Some(SiteRef::none()));
        assert!(invitation.enroll_into_site.is_none());
    }

    #[test]
    fn test_create_defaults_keep_explicit_site() {
        let mut invitation = ComputerInvitation {
            site: Some(SiteRef::new(2, "Berlin")),
            ..Default::default()
        };

        invitation.apply_create_defaults();

        assert_eq!(invitation.site, Some(SiteRef::new(2, "Berlin")));
        assert!(invitation.enroll_into_site.is_none());
    }

    #[test]
    fn test_computer_invitation_serialization_omits_unset_fields() {
        let invitation = ComputerInvitation {
            invitation_type: Some("DEFAULT".to_string()),
            multiple_users_allowed: Some(false),
            ..Default::default()
        };

        let xml = to_xml(ComputerInvitation::ROOT, &invitation).unwrap();

        assert_eq!(
            xml,
            "<computer_invitation><invitation_type>DEFAULT</invitation_type>\
             <multiple_users_allowed>false</multiple_users_allowed></computer_invitation>"
        );
    }

    #[test]
    fn test_computer_invitation_list_deserialization() {
        let xml = "<computer_invitations><size>2</size>\
            <computer_invitation><id>1</id><invitation>107716249</invitation>\
            <invitation_type>DEFAULT</invitation_type>\
            <expiration_date>2030-12-31 23:59:59</expiration_date>\
            <expiration_date_epoch>1924991999000</expiration_date_epoch></computer_invitation>\
            <computer_invitation><id>2</id><invitation>223344</invitation></computer_invitation>\
            </computer_invitations>";

        let list: ComputerInvitationsList = from_xml(xml).unwrap();

        assert_eq!(list.size, 2);
        assert_eq!(list.computer_invitations[0].id, 1);
        assert_eq!(
            list.computer_invitations[0].invitation.as_deref(),
            Some("107716249")
        );
        assert_eq!(
            list.computer_invitations[0].expiration_date_epoch,
            Some(1_924_991_999_000)
        );
        assert!(list.computer_invitations[1].invitation_type.is_none());
    }

    #[test]
    fn test_computer_invitation_detail_deserialization() {
        let xml = "<computer_invitation><id>4</id><invitation>5551212</invitation>\
            <invitation_status>UNUSED</invitation_status><times_used>0</times_used>\
            <enroll_into_site><id>-1</id><name>None</name></enroll_into_site>\
            <site><id>-1</id><name>None</name></site></computer_invitation>";

        let invitation: ComputerInvitation = from_xml(xml).unwrap();

        assert_eq!(invitation.get_id(), Some(4));
        assert_eq!(invitation.invitation_status.as_deref(), Some("UNUSED"));
        assert_eq!(invitation.times_used, Some(0));
        assert!(invitation.site.unwrap().is_none_sentinel());
        assert!(invitation.ssh_username.is_none());
    }

    #[test]
    fn test_computer_invitation_constants() {
        assert_eq!(ComputerInvitation::NAME, "Computer Invitation");
        assert_eq!(ComputerInvitation::ROOT, "computer_invitation");
    }
}
