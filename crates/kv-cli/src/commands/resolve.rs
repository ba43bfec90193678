//! Resolve command implementation

use kv_provider::resolve;

use crate::error::Result;

/// Print the parse options for `path` as JSON (`null` when unrecognized)
pub fn run_resolve(path: &str) -> Result<()> {
    let options = resolve(path);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
