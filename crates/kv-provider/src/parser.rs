//! Key/value tokenizer for `.properties`-style text
//!
//! The parser turns raw text into a [`KeyValueMap`], honouring the comment
//! markers and section handling requested through [`ParseOptions`]. It
//! follows the `.properties` conventions: `=`, `:` or whitespace separate
//! keys from values, a trailing backslash continues a value on the next
//! physical line, and backslash escapes (`\t`, `\n`, `\uXXXX`, ...) are
//! decoded in both keys and values.

use regex::Regex;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::format::ParseOptions;

/// Comment markers used when no options are given or options leave them unset
pub const DEFAULT_COMMENTS: &[&str] = &["#", "!"];

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// A parsed value: plain text, or a nested mapping for a `[section]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValue {
    Value(String),
    Section(KeyValueMap),
}

impl KeyValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Value(text) => Value::String(text.clone()),
            Self::Section(map) => map.to_json(),
        }
    }
}

/// Insertion-ordered key/value mapping produced by a [`KeyValueParser`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueMap {
    entries: Vec<(String, KeyValue)>,
    index: HashMap<String, usize>,
}

impl KeyValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Get a plain value, skipping sections
    pub fn get_value(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            KeyValue::Value(text) => Some(text),
            KeyValue::Section(_) => None,
        }
    }

    pub fn section(&self, name: &str) -> Option<&KeyValueMap> {
        match self.get(name)? {
            KeyValue::Section(map) => Some(map),
            KeyValue::Value(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert a value; an existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: KeyValue) {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.push(key, value),
        }
    }

    /// Get a section for writing, creating it or reopening an existing one.
    pub fn section_mut(&mut self, name: &str) -> &mut KeyValueMap {
        let idx = match self.position(name) {
            Some(idx) => {
                if !matches!(self.entries[idx].1, KeyValue::Section(_)) {
                    self.entries[idx].1 = KeyValue::Section(KeyValueMap::new());
                }
                idx
            }
            None => {
                self.push(name.to_string(), KeyValue::Section(KeyValueMap::new()));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[idx].1 {
            KeyValue::Section(map) => map,
            KeyValue::Value(_) => unreachable!("section slot holds a section"),
        }
    }

    /// Convert to a JSON object in file order
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        Value::Object(map)
    }

    /// Convert to `{key, value}` records in file order
    pub fn to_records(&self) -> Vec<Value> {
        self.entries
            .iter()
            .map(|(k, v)| json!({ "key": k, "value": v.to_json() }))
            .collect()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn push(&mut self, key: String, value: KeyValue) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }
}

/// Trait for key/value text parsers
pub trait KeyValueParser: Send + Sync {
    /// Parse raw text into a mapping. `None` options select parser defaults.
    fn parse(&self, text: &str, options: Option<&ParseOptions>) -> Result<KeyValueMap>;
}

/// Parser for `.properties`, `.ini` and `.env` text
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueParser for PropertiesParser {
    fn parse(&self, text: &str, options: Option<&ParseOptions>) -> Result<KeyValueMap> {
        let sections = options.is_some_and(|o| o.sections);
        let comments: Vec<&str> = match options.and_then(|o| o.comments.as_ref()) {
            Some(markers) => markers
                .iter()
                .map(String::as_str)
                .filter(|m| !m.is_empty())
                .collect(),
            None => DEFAULT_COMMENTS.to_vec(),
        };

        let mut root = KeyValueMap::new();
        let mut current: Option<String> = None;

        for (line_no, line) in logical_lines(text, &comments) {
            if sections && line.starts_with('[') {
                let header = line.trim_end();
                let Some(inner) = header.strip_suffix(']') else {
                    return Err(Error::parse(line_no, "unterminated section header"));
                };
                let name = inner[1..].trim().to_string();
                root.section_mut(&name);
                current = Some(name);
                continue;
            }

            let (key, value) = split_entry(&line, line_no)?;
            let target = match &current {
                Some(name) => root.section_mut(name),
                None => &mut root,
            };
            target.insert(key, KeyValue::Value(value));
        }

        Ok(root)
    }
}

/// Join continued physical lines and drop blanks and comments.
///
/// Returns each logical line with the 1-based number of its first physical line.
fn logical_lines(text: &str, comments: &[&str]) -> Vec<(usize, String)> {
    let mut physical = LINE_BREAK.split(text).enumerate();
    let mut logical = Vec::new();

    while let Some((idx, raw)) = physical.next() {
        let line = raw.trim_start();
        if line.is_empty() || comments.iter().any(|m| line.starts_with(*m)) {
            continue;
        }

        let mut joined = String::new();
        let mut current = line;
        loop {
            if is_continued(current) {
                joined.push_str(&current[..current.len() - 1]);
                match physical.next() {
                    Some((_, next)) => current = next.trim_start(),
                    None => break,
                }
            } else {
                joined.push_str(current);
                break;
            }
        }
        logical.push((idx + 1, joined));
    }

    logical
}

/// A line continues when it ends in an odd run of backslashes
fn is_continued(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str, line_no: usize) -> Result<(String, String)> {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = idx;
                value_start = idx + 1;
                break;
            }
            c if c.is_whitespace() => {
                key_end = idx;
                value_start = skip_separator(line, idx);
                break;
            }
            _ => {}
        }
    }

    let key = unescape(&line[..key_end], line_no)?;
    let value = unescape(line[value_start..].trim_start(), line_no)?;
    Ok((key, value))
}

/// After whitespace, one `=` or `:` may still separate key and value
fn skip_separator(line: &str, from: usize) -> usize {
    let rest = line[from..].trim_start();
    let pos = line.len() - rest.len();
    if rest.starts_with('=') || rest.starts_with(':') {
        pos + 1
    } else {
        pos
    }
}

fn unescape(raw: &str, line_no: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{0C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.chars().count() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => out.push(ch),
                    None => {
                        return Err(Error::parse(
                            line_no,
                            format!("malformed \\u escape: \\u{hex}"),
                        ));
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
