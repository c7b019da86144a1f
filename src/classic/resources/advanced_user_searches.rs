//! Advanced user search resource implementation.
//!
//! An advanced user search is a saved query over Jamf Pro user records: a
//! list of criteria, the columns to display and, on reads, the matching
//! users.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::AdvancedUserSearch;
//!
//! let search = AdvancedUserSearch::get_by_id(&client, 1).await?;
//! for user in search.users.map(|u| u.users).unwrap_or_default() {
//!     println!("{}", user.username.unwrap_or_default());
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::shared::default_site;
use crate::classic::{ClassicResource, ResourceOperation, ResourcePath, SiteRef};
use crate::clients::HttpMethod;

/// A saved search over user records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AdvancedUserSearch {
    /// The unique identifier of the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<SearchCriteria>,

    /// Columns shown in search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<DisplayFields>,

    /// Users matching the criteria. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<SearchUsers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteRef>,
}

/// Wire wrapper for `<criteria><size/><criterion>...</criterion></criteria>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(rename = "criterion", default)]
    pub criteria: Vec<SearchCriterion>,
}

/// One condition of a search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchCriterion {
    /// The field being matched, e.g. `Username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Position among the criteria, starting at 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// `and` or `or`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and_or: Option<String>,

    /// e.g. `is`, `like`, `matches regex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_paren: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_paren: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayFields {
    #[serde(rename = "display_field", default)]
    pub display_fields: Vec<DisplayField>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayField {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchUsers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(rename = "user", default)]
    pub users: Vec<SearchUser>,
}

/// A user record matched by a search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Username", default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ClassicResource for AdvancedUserSearch {
    type List = AdvancedUserSearchesList;

    const NAME: &'static str = "Advanced User Search";
    const ROOT: &'static str = "advanced_user_search";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "advancedusersearches",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "advancedusersearches/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "advancedusersearches/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "advancedusersearches/id/0",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "advancedusersearches/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "advancedusersearches/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "advancedusersearches/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "advancedusersearches/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }

    fn apply_create_defaults(&mut self) {
        default_site(&mut self.site);
    }
}

/// Response body of `GET advancedusersearches`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AdvancedUserSearchesList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "advanced_user_search", default)]
    pub advanced_user_searches: Vec<AdvancedUserSearchSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AdvancedUserSearchSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
