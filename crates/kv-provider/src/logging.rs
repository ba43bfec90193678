use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for hosts of the provider.
///
/// Uses the `RUST_LOG` environment variable when set, otherwise
/// `default_filter` (typically [`ProviderConfig::log_level`]).
///
/// [`ProviderConfig::log_level`]: crate::config::ProviderConfig::log_level
pub fn init(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info, warn};

    #[test]
    fn test_logging_init() {
        // We can only init once per process
        let _ = init("debug");

        info!("This is an info message");
        warn!("This is a warning message");
        error!("This is an error message");
    }
}
