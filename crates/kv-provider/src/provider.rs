//! DataProvider trait and related types

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

use crate::error::Error;

/// Receives the loaded record set; invoked exactly once per load
pub type LoadCompletion = Box<dyn FnOnce(Vec<Value>) + Send>;

/// Receives the outcome of a write: `None` on success
pub type SaveCompletion = Box<dyn FnOnce(Option<Error>) + Send>;

/// Result of a load, kept alongside the diagnostic that emptied it
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<Value>,
    pub diagnostic: Option<Error>,
}

impl LoadOutcome {
    pub fn loaded(records: Vec<Value>) -> Self {
        Self {
            records,
            diagnostic: None,
        }
    }

    pub fn failed(error: Error) -> Self {
        Self {
            records: Vec::new(),
            diagnostic: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Why a save did not write anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Records lack the `key`/`value` shape
    NotProperties,
    /// Serialization produced no text
    Empty,
}

/// Result of a save that did not fail on write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { bytes: usize },
    Skipped(SkipReason),
}

/// Capability set a data-viewing host expects from a file-format provider.
///
/// Table enumeration and schema lookup default to "none", which is the
/// answer for every single-table format.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// File extensions (with leading dot) this provider handles
    fn supported_file_types(&self) -> &[&'static str];

    /// Load data from `source` and hand the records to `completion`.
    ///
    /// Never fails: errors are reported through the provider's own
    /// channels and `completion` still receives a (possibly empty) set.
    async fn get_data(
        &self,
        source: &str,
        parse_options: Option<&Value>,
        completion: LoadCompletion,
    );

    /// Names of the tables in multi-table sources
    fn get_data_table_names(&self, _source: &str) -> Vec<String> {
        Vec::new()
    }

    /// JSON schema for sources that carry one
    fn get_data_schema(&self, _source: &str) -> Option<Value> {
        None
    }

    /// Persist `records` to `path`, reporting write failures via `completion`.
    async fn save_data(
        &self,
        path: &Path,
        records: &[Value],
        table_name: &str,
        completion: Option<SaveCompletion>,
    );
}
