//! Jamf Pro user account resource implementation.
//!
//! Accounts are addressed by `userid` and `username` rather than the usual
//! `id` and `name` path segments. The list endpoint returns users and
//! account groups side by side.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::{Account, AccountGroupRef, AccountGroups};
//!
//! let account = Account {
//!     name: Some("Barry White".to_string()),
//!     access_level: Some("Group Access".to_string()),
//!     privilege_set: Some("Custom".to_string()),
//!     password: Some("a long generated password".to_string()),
//!     groups: Some(AccountGroups::from(vec![AccountGroupRef::new(195, "standard-group")])),
//!     ..Default::default()
//! };
//! let created = Account::create(&client, &account).await?;
//! println!("created account {:?}", created.id);
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::shared::default_site;
use crate::classic::{ClassicResource, ResourceOperation, ResourcePath, SiteRef};
use crate::clients::HttpMethod;

/// A Jamf Pro user account.
///
/// `access_level` is one of `Full Access`, `Site Access` or `Group Access`;
/// with group access the account's rights come from `groups`.
/// `privilege_set` is one of `Administrator`, `Auditor`, `Enrollment Only`
/// or `Custom`; custom sets list their rights in `privileges`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Account {
    /// The unique identifier of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the account comes from a directory service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_user: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// `Enabled` or `Disabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,

    /// Directory server of a directory account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_server: Option<LdapServerRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_password_change: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,

    /// Write-only; the server never returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privilege_set: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteRef>,

    /// Account groups the account belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<AccountGroups>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileges: Option<AccountPrivileges>,
}

/// A reference to a directory server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LdapServerRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Wire wrapper for `<groups><group>...</group></groups>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountGroups {
    #[serde(rename = "group", default)]
    pub groups: Vec<AccountGroupRef>,
}

impl From<Vec<AccountGroupRef>> for AccountGroups {
    fn from(groups: Vec<AccountGroupRef>) -> Self {
        Self { groups }
    }
}

/// A reference to an account group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountGroupRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl AccountGroupRef {
    /// Creates a reference to an account group.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Rights granted by a `Custom` privilege set, grouped by area.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountPrivileges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jss_objects: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jss_settings: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jss_actions: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recon: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casper_admin: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casper_remote: Option<PrivilegeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casper_imaging: Option<PrivilegeList>,
}

/// Wire wrapper for `<...><privilege>Read Scripts</privilege></...>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrivilegeList {
    #[serde(rename = "privilege", default)]
    pub privileges: Vec<String>,
}

impl ClassicResource for Account {
    type List = AccountsList;

    const NAME: &'static str = "Account";
    const ROOT: &'static str = "account";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "accounts"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "accounts/userid/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "accounts/username/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "accounts/userid/0",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "accounts/userid/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "accounts/username/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "accounts/userid/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "accounts/username/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }

    fn apply_create_defaults(&mut self) {
        default_site(&mut self.site);
    }
}

/// Response body of `GET accounts`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AccountsList {
    #[serde(default)]
    pub users: AccountUserList,
    #[serde(default)]
    pub groups: AccountGroupList,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AccountUserList {
    #[serde(rename = "user", default)]
    pub users: Vec<AccountSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AccountGroupList {
    #[serde(rename = "group", default)]
    pub groups: Vec<AccountSummary>,
}

/// One user or group entry of [`AccountsList`].
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AccountSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
