//! Script resource implementation.
//!
//! Scripts are shell (or other interpreter) files policies run on managed
//! computers. The body travels as escaped text in `script_contents`.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::Script;
//!
//! let script = Script {
//!     name: Some("Install Rosetta".to_string()),
//!     priority: Some("After".to_string()),
//!     ..Default::default()
//! }
//! .with_contents_from_file("scripts/install_rosetta.sh")?;
//!
//! let updated = Script::update_by_id(&client, 3, &script).await?;
//! ```

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classic::{ClassicResource, ResourceOperation, ResourcePath};
use crate::clients::HttpMethod;

/// A script stored in Jamf Pro.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier of the script
///
/// ## Writable Fields
/// - `name`, `category`, `filename`, `info`, `notes`
/// - `priority` - `Before`, `After` or `At Reboot`
/// - `parameters` - labels of parameters 4 through 11
/// - `os_requirements` - comma-separated OS versions, e.g. `14.x,15.x`
/// - `script_contents` - the script body
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Script {
    /// The unique identifier of the script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category name, `None` for no category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the script runs relative to other policy actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ScriptParameters>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_requirements: Option<String>,

    /// The script body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_contents: Option<String>,
}

/// Labels shown for script parameters 4 through 11.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter7: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter8: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter9: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter10: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter11: Option<String>,
}

impl Script {
    /// Replaces `script_contents` with the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`io::Error`] if the file cannot be read or is not UTF-8.
    pub fn with_contents_from_file(mut self, path: impl AsRef<Path>) -> io::Result<Self> {
        self.script_contents = Some(std::fs::read_to_string(path)?);
        Ok(self)
    }
}

impl ClassicResource for Script {
    type List = ScriptsList;

    const NAME: &'static str = "Script";
    const ROOT: &'static str = "script";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "scripts"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetById,
            &["id"],
            "scripts/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::GetByName,
            &["name"],
            "scripts/name/{name}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "scripts/id/0"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateById,
            &["id"],
            "scripts/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateByName,
            &["name"],
            "scripts/name/{name}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteById,
            &["id"],
            "scripts/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteByName,
            &["name"],
            "scripts/name/{name}",
        ),
    ];

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// Response body of `GET scripts`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptsList {
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "script", default)]
    pub scripts: Vec<ScriptSummary>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptSummary {
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
    use std::io::Write;

    #[test]
    fn test_script_full_crud_paths() {
        for (operation, ids, template) in [
            (ResourceOperation::List, &[][..], "scripts"),
            (ResourceOperation::GetById, &["id"][..], "scripts/id/{id}"),
            (ResourceOperation::GetByName, &["name"][..], "scripts/name/{name}"),
            (ResourceOperation::Create, &[][..], "scripts/id/0"),
            (ResourceOperation::UpdateById, &["id"][..], "scripts/id/{id}"),
            (ResourceOperation::UpdateByName, &["name"][..], "scripts/name/{name}"),
            (ResourceOperation::DeleteById, &["id"][..], "scripts/id/{id}"),
            (ResourceOperation::DeleteByName, &["name"][..], "scripts/name/{name}"),
        ] {
            let path = get_path(Script::PATHS, operation, ids).unwrap();
            assert_eq!(path.template, template);
            assert_eq!(path.http_method, operation.default_http_method());
        }
    }

    #[test]
    fn test_script_contents_are_escaped_on_the_wire() {
        let script = Script {
            name: Some("Greeting".to_string()),
            script_contents: Some("#!/bin/bash\nif [ 1 < 2 ] && true; then echo hi; fi".to_string()),
            ..Default::default()
        };

        let xml = to_xml(Script::ROOT, &script).unwrap();

        assert!(xml.contains("[ 1 &lt; 2 ] &amp;&amp; true"));

        let decoded: Script = from_xml(&xml).unwrap();
        assert_eq!(decoded.script_contents, script.script_contents);
    }

    #[test]
    fn test_script_parameters_round_trip() {
        let xml = "<script><id>3</id><name>Rename</name><priority>After</priority>\
            <parameters><parameter4>New hostname</parameter4></parameters></script>";

        let script: Script = from_xml(xml).unwrap();

        let parameters = script.parameters.unwrap();
        assert_eq!(parameters.parameter4.as_deref(), Some("New hostname"));
        assert!(parameters.parameter5.is_none());
        assert!(script.category.is_none());
    }

    #[test]
    fn test_with_contents_from_file_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "jamfpro-script-{}.sh",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "#!/bin/zsh\r\n  echo updated\n").unwrap();
        drop(file);

        let script = Script::default().with_contents_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let contents = Some("#!/bin/zsh\r\n  echo updated\n");
        assert_eq!(script.script_contents.as_deref(), contents);

        let xml = to_xml(Script::ROOT, &script).unwrap();
        let decoded: Script = from_xml(&xml).unwrap();
        assert_eq!(decoded.script_contents.as_deref(), contents);
    }

    #[test]
    fn test_with_contents_from_file_reports_missing_file() {
        let result = Script::default().with_contents_from_file("/nonexistent/jamfpro/script.sh");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_scripts_list_deserialization() {
        let list: ScriptsList = from_xml(
            "<scripts><size>1</size><script><id>3</id><name>Rename</name></script></scripts>",
        )
        .unwrap();

        assert_eq!(list.size, 1);
        assert_eq!(list.scripts[0].name, "Rename");
    }
}
