//! Command implementations

mod formats;
mod load;
mod resolve;
mod save;

pub use formats::run_formats;
pub use load::{load_records, run_load};
pub use resolve::run_resolve;
pub use save::run_save;

use kv_provider::{DataProvider, ProviderRegistry};
use std::sync::Arc;

use crate::error::{CliError, Result};

/// Look up the provider for `path` or explain which extensions are supported
fn provider_for(registry: &ProviderRegistry, path: &str) -> Result<Arc<dyn DataProvider>> {
    registry.provider_for(path).ok_or_else(|| {
        CliError::user(format!(
            "Unsupported data file '{}'. Supported extensions: {}",
            path,
            registry.supported_extensions().join(", ")
        ))
    })
}
