//! Properties data provider for `.env`, `.ini` and `.properties` files
//!
//! Loading reads the file, parses it with format-specific options and turns
//! the mapping into `{key, value}` records. A failed load is reported to the
//! user and still completes with an empty record set.
//!
//! Saving accepts records edited in a properties grid and writes them back
//! as `key=value` lines, continuing multi-line values with a trailing
//! backslash.

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::format::{self, ParseOptions, SUPPORTED_EXTENSIONS};
use crate::io::{FileSystem, LocalFileSystem};
use crate::normalize::is_properties_collection;
use crate::notify::Notifier;
use crate::parser::{KeyValueMap, KeyValueParser, PropertiesParser};
use crate::provider::{
    DataProvider, LoadCompletion, LoadOutcome, SaveCompletion, SaveOutcome, SkipReason,
};
use crate::writer::to_properties_string;

/// `tracing` target for every event this provider emits
pub const LOG_TARGET: &str = "properties.data.provider";

/// Warning shown when saving records that are not key/value pairs
pub const NOT_PROPERTIES_WARNING: &str = "Data loaded in Preview is not a Properties collection. Use other data formats to Save this data.";

pub struct PropertiesDataProvider {
    fs: Arc<dyn FileSystem>,
    parser: Arc<dyn KeyValueParser>,
    notifier: Arc<dyn Notifier>,
    config: ProviderConfig,
}

impl PropertiesDataProvider {
    /// Create a provider on the local file system with the default parser.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        debug!(target: LOG_TARGET, "created for: {:?}", SUPPORTED_EXTENSIONS);
        Self {
            fs: Arc::new(LocalFileSystem::new()),
            parser: Arc::new(PropertiesParser::new()),
            notifier,
            config: ProviderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_parser(mut self, parser: Arc<dyn KeyValueParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Load `source` into records, keeping any error as a diagnostic.
    pub async fn load(&self, source: &str) -> LoadOutcome {
        let options = format::resolve(source);
        match self.read_and_parse(source, options.as_ref()).await {
            Ok(map) => LoadOutcome::loaded(map.to_records()),
            Err(err) => {
                error!(target: LOG_TARGET, source, "getData(): error parsing data file: {err}");
                self.notifier.show_error(&format!(
                    "Unable to parse data file: '{source}'. \n\t Error: {err}"
                ));
                LoadOutcome::failed(err)
            }
        }
    }

    async fn read_and_parse(
        &self,
        source: &str,
        options: Option<&ParseOptions>,
    ) -> Result<KeyValueMap> {
        let text = self
            .fs
            .read_data_file(Path::new(source), &self.config.encoding)
            .await?;
        self.parser.parse(&text, options)
    }

    /// Save properties-shaped records to `path`.
    ///
    /// Records that are not a properties collection raise a warning and are
    /// not written. Write failures are returned as errors.
    pub async fn save(&self, path: &Path, records: &[Value]) -> Result<SaveOutcome> {
        if !is_properties_collection(records) {
            self.notifier.show_warning(NOT_PROPERTIES_WARNING);
            return Ok(SaveOutcome::Skipped(SkipReason::NotProperties));
        }

        let text = to_properties_string(records);
        if text.is_empty() {
            return Ok(SaveOutcome::Skipped(SkipReason::Empty));
        }

        self.fs.write_data_file(path, &text).await?;
        debug!(
            target: LOG_TARGET,
            path = %path.display(),
            records = records.len(),
            "saveData(): wrote properties"
        );
        Ok(SaveOutcome::Written { bytes: text.len() })
    }
}

#[async_trait]
impl DataProvider for PropertiesDataProvider {
    fn supported_file_types(&self) -> &[&'static str] {
        SUPPORTED_EXTENSIONS
    }

    /// Caller-supplied parse options are ignored; the options resolved from
    /// the file extension always win.
    async fn get_data(
        &self,
        source: &str,
        _parse_options: Option<&Value>,
        completion: LoadCompletion,
    ) {
        let outcome = self.load(source).await;
        completion(outcome.records);
    }

    async fn save_data(
        &self,
        path: &Path,
        records: &[Value],
        _table_name: &str,
        completion: Option<SaveCompletion>,
    ) {
        match self.save(path, records).await {
            Ok(SaveOutcome::Written { .. }) => {
                if let Some(completion) = completion {
                    completion(None);
                }
            }
            Ok(SaveOutcome::Skipped(_)) => {}
            Err(err) => {
                if let Some(completion) = completion {
                    completion(Some(err));
                }
            }
        }
    }
}
