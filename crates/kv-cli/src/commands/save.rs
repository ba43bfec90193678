//! Save command implementation

use colored::Colorize;
use kv_provider::{Error, ProviderRegistry};
use kv_provider::normalize::normalize_records;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tokio::sync::oneshot;

use super::provider_for;
use crate::error::{CliError, Result};

/// Save JSON records from `input` (or stdin) to `path`
pub async fn run_save(registry: &ProviderRegistry, path: &str, input: Option<&Path>) -> Result<()> {
    let provider = provider_for(registry, path)?;
    let records = normalize_records(read_input(input)?);
    let (tx, rx) = oneshot::channel();

    provider
        .save_data(
            Path::new(path),
            &records,
            "",
            Some(Box::new(move |err: Option<Error>| {
                let _ = tx.send(err);
            })),
        )
        .await;

    // The completion is dropped unused when the provider skips the write
    match rx.await {
        Ok(None) => {
            println!("{} Saved {} records to {}", "✓".green(), records.len(), path);
            Ok(())
        }
        Ok(Some(err)) => Err(err.into()),
        Err(_) => Err(CliError::user(format!("Nothing was saved to '{path}'"))),
    }
}

fn read_input(input: Option<&Path>) -> Result<Value> {
    let text = match input {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(serde_json::from_str(&text)?)
}
