//! XML encoding and decoding for Classic API payloads.
//!
//! Resource shapes describe their wire form through serde attributes: field
//! renames give element names, `skip_serializing_if = "Option::is_none"`
//! keeps unset fields off the wire, and `#[serde(default)]` lets absent
//! elements decode to `None` or an empty list.
//!
//! Text is kept byte for byte, surrounding whitespace included. Carriage
//! returns are written as `&#13;` because XML parsers fold a literal `\r\n`
//! into `\n`.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes `value` as an XML document whose root element is `root`.
///
/// # Errors
///
/// Returns [`quick_xml::se::SeError`] if the value has no XML form (for
/// example a map with non-string keys).
pub fn to_xml<T: Serialize>(root: &str, value: &T) -> Result<String, quick_xml::se::SeError> {
    quick_xml::se::to_string_with_root(root, value).map(escape_carriage_returns)
}

/// Serializes `value` like [`to_xml`], indented for people to read.
///
/// # Errors
///
/// Returns [`quick_xml::se::SeError`] if the value has no XML form.
pub fn to_xml_pretty<T: Serialize>(
    root: &str,
    value: &T,
) -> Result<String, quick_xml::se::SeError> {
    let mut buffer = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(root))?;
    serializer.indent(' ', 4);
    value.serialize(serializer)?;
    Ok(escape_carriage_returns(buffer))
}

/// Parses an XML document into `T`. The root element name is not checked.
///
/// # Errors
///
/// Returns [`quick_xml::de::DeError`] if the document is malformed or does
/// not match the shape of `T`.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, quick_xml::de::DeError> {
    quick_xml::de::from_str(xml)
}

// The serializer never emits `\r` as markup, so any occurrence is text.
fn escape_carriage_returns(xml: String) -> String {
    if xml.contains('\r') {
        xml.replace('\r', "&#13;")
    } else {
        xml
    }
}
