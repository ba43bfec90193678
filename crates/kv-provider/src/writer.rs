//! Serialization of record sets into `.properties` text

use regex::{NoExpand, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Backslash followed by a line break: continues a value on the next line
pub const CONTINUATION: &str = "\\\n";

/// Render one record as a logical `key=value` entry, newline terminated.
///
/// Backslashes are doubled so the parser reads them back literally and a
/// trailing one cannot continue into the next entry. Line breaks inside the
/// entry then become continuation markers so a multi-line value stays a
/// single property.
pub fn format_property(record: &Value) -> String {
    let key = escape_backslashes(&field_text(record.get("key")));
    let value = escape_backslashes(&field_text(record.get("value")));
    let line = format!("{key}={value}");
    let mut entry = LINE_BREAK
        .replace_all(&line, NoExpand(CONTINUATION))
        .into_owned();
    entry.push('\n');
    entry
}

/// Render a whole record set in input order
pub fn to_properties_string(records: &[Value]) -> String {
    records.iter().map(format_property).collect()
}

fn escape_backslashes(text: &str) -> String {
    text.replace('\\', "\\\\")
}

/// Strings are written raw, missing and null fields as empty text, and
/// anything else as compact JSON.
fn field_text(field: Option<&Value>) -> String {
    match field {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
