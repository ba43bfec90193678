//! Formats command implementation

use colored::Colorize;
use kv_provider::{FormatTag, ProviderRegistry};

use crate::error::Result;

/// List the extensions the registry can route
pub fn run_formats(registry: &ProviderRegistry) -> Result<()> {
    println!("{}", "Supported formats".bold());
    for ext in registry.supported_extensions() {
        let sections = FormatTag::from_extension(ext)
            .map(|tag| tag.parse_options().sections)
            .unwrap_or(false);
        println!("  {:<12} sections: {}", ext.cyan(), sections);
    }
    Ok(())
}
