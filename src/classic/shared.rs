//! Reference types shared by several resources.

use serde::{Deserialize, Serialize};

/// A reference to a Jamf Pro site.
///
/// Records that belong to no site carry the sentinel `{id: -1, name: "None"}`
/// on the wire. A reference with `id == 0` and an empty name is *unset*;
/// create operations replace it (and a missing reference) with the sentinel.
///
/// # Example
///
/// ```rust
/// use jamfpro::classic::SiteRef;
///
/// let none = SiteRef::none();
/// assert_eq!(none.id, -1);
/// assert_eq!(none.name, "None");
/// assert!(SiteRef::default().is_unset());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRef {
    /// The site ID, `-1` for "no site".
    #[serde(default)]
    pub id: i64,

    /// The site display name.
    #[serde(default)]
    pub name: String,
}

impl SiteRef {
    /// ID of the "no site" sentinel.
    pub const NONE_ID: i64 = -1;

    /// Name of the "no site" sentinel.
    pub const NONE_NAME: &'static str = "None";

    /// Creates a reference to a site.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the "no site" sentinel.
    #[must_use]
    pub fn none() -> Self {
        Self::new(Self::NONE_ID, Self::NONE_NAME)
    }

    /// Returns `true` if neither an ID nor a name was set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }

    /// Returns `true` if this is the "no site" sentinel.
    #[must_use]
    pub fn is_none_sentinel(&self) -> bool {
        self.id == Self::NONE_ID && self.name == Self::NONE_NAME
    }
}

/// Replaces a missing or unset site with the "no site" sentinel.
///
/// A site the caller set is left untouched.
pub(crate) fn default_site(site: &mut Option<SiteRef>) {
    if site.as_ref().map_or(true, SiteRef::is_unset) {
        *site = Some(SiteRef::none());
    }
}

/// A reference to a Jamf Pro category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// The category ID, `-1` for "no category".
    #[serde(default)]
    pub id: i64,

    /// The category display name.
    #[serde(default)]
    pub name: String,
}

impl CategoryRef {
    /// Creates a reference to a category.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::codec::{from_xml, to_xml};

    #[test]
    fn test_default_site_fills_missing_site() {
        let mut site = None;
        default_site(&mut site);
        assert_eq!(site, Some(SiteRef::none()));
    }

    #[test]
    fn test_default_site_fills_zero_valued_site() {
        let mut site = Some(SiteRef::default());
        default_site(&mut site);
        assert!(site.unwrap().is_none_sentinel());
    }

    #[test]
    fn test_default_site_keeps_caller_site() {
        let mut site = Some(SiteRef::new(3, "Amsterdam"));
        default_site(&mut site);
        assert_eq!(site, Some(SiteRef::new(3, "Amsterdam")));

        let mut named_only = Some(SiteRef::new(0, "London"));
        default_site(&mut named_only);
        assert_eq!(named_only, Some(SiteRef::new(0, "London")));
    }

    #[test]
    fn test_site_ref_wire_form() {
        let xml = to_xml("site", &SiteRef::none()).unwrap();
        assert_eq!(xml, "<site><id>-1</id><name>None</name></site>");

        let site: SiteRef = from_xml("<site><id>4</id><name>Paris</name></site>").unwrap();
        assert_eq!(site, SiteRef::new(4, "Paris"));
    }
}
