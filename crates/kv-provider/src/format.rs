//! Format detection and parse option resolution

use serde::{Deserialize, Serialize};

/// Extensions routed to the key/value provider, in lookup order
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".env", ".ini", ".properties"];

/// Supported key/value file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Env,
    Ini,
    Properties,
}

impl FormatTag {
    /// Detect format from the trailing dot-extension of a path or URL.
    ///
    /// The extension is everything from the last `.` to the end, so
    /// `/srv/app/.env` is `.env` and `dir.d/file` has no usable extension.
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rfind('.').map(|idx| &path[idx..])?;
        Self::from_extension(ext)
    }

    /// Detect format from an extension including its leading dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".env" => Some(Self::Env),
            ".ini" => Some(Self::Ini),
            ".properties" => Some(Self::Properties),
            _ => None,
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Env => ".env",
            Self::Ini => ".ini",
            Self::Properties => ".properties",
        }
    }

    /// Get the parser configuration for this format
    pub fn parse_options(&self) -> ParseOptions {
        match self {
            Self::Env => ParseOptions::new(true, Some(&["#"])),
            // ini files in the wild use # as well as ;
            Self::Ini => ParseOptions::new(true, Some(&[";", "#"])),
            Self::Properties => ParseOptions::new(true, None),
        }
    }
}

/// Parser configuration for one format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Whether `[section]` headers open nested mappings
    pub sections: bool,
    /// Comment markers; `None` leaves the parser defaults in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

impl ParseOptions {
    fn new(sections: bool, comments: Option<&[&str]>) -> Self {
        Self {
            sections,
            comments: comments.map(|c| c.iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// Resolve parser configuration for a path.
///
/// Unknown extensions yield `None`, which the parser treats as its defaults.
pub fn resolve(path: &str) -> Option<ParseOptions> {
    FormatTag::from_path(path).map(|tag| tag.parse_options())
}
