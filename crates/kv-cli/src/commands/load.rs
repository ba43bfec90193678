//! Load command implementation

use kv_provider::ProviderRegistry;
use serde_json::Value;
use tokio::sync::oneshot;

use super::provider_for;
use crate::error::{CliError, Result};

/// Load `path` and print its records as JSON.
///
/// A file that fails to parse still prints an empty set; the provider has
/// already reported the failure on stderr.
pub async fn run_load(registry: &ProviderRegistry, path: &str, pretty: bool) -> Result<()> {
    let records = load_records(registry, path).await?;
    let output = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{output}");
    Ok(())
}

/// Run the provider for `path` and collect the records it completes with
pub async fn load_records(registry: &ProviderRegistry, path: &str) -> Result<Vec<Value>> {
    let provider = provider_for(registry, path)?;
    let (tx, rx) = oneshot::channel();

    provider
        .get_data(
            path,
            None,
            Box::new(move |records: Vec<Value>| {
                let _ = tx.send(records);
            }),
        )
        .await;

    let records = rx
        .await
        .map_err(|_| CliError::user("data provider did not return any records"))?;
    tracing::debug!(path, records = records.len(), "loaded");
    Ok(records)
}
