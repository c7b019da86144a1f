//! Printer resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::Printer;
//!
//! let printers = Printer::list(&client).await?;
//! for printer in &printers.printers {
//!     Printer::delete_by_id(&client, printer.id).await?;
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::classic::{ClassicResource, ResourceOperation, ResourcePath};
use crate::clients::HttpMethod;

/// A printer Jamf Pro can map on managed computers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Printer {
    /// The unique identifier of the printer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Device URI, e.g. `lpd://10.1.20.204/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Queue name as CUPS knows it.
    #[serde(rename = "CUPS_name", default, skip_serializing_if = "Option::is_none")]
    pub cups_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the printer becomes the default once mapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_generic: Option<bool>,

    /// PPD file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppd_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppd_contents: Option<String>,
}

impl ClassicResource for Printer {
    type List = PrintersList;

    const NAME: &'static str = "Printer";
    const ROOT: &'static str = "printer";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "printers"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "printers/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "printers/name/{name}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "printers/id/0"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "printers/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "printers/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "printers/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "printers/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// Response body of `GET printers`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct PrintersList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "printer", default)]
    pub printers: Vec<PrinterSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct PrinterSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
