//! Provider registry for routing data files by extension

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::notify::Notifier;
use crate::properties::PropertiesDataProvider;
use crate::provider::DataProvider;

/// Registry that selects a data provider for a file path.
///
/// Providers are consulted in registration order; the first one listing the
/// path's extension wins.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn DataProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in properties provider.
    pub fn with_defaults(notifier: Arc<dyn Notifier>, config: ProviderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(
            PropertiesDataProvider::new(notifier).with_config(config),
        ));
        registry
    }

    pub fn register(&mut self, provider: Arc<dyn DataProvider>) {
        self.providers.push(provider);
    }

    /// Get the provider for a path, matched on the text from its last `.`
    pub fn provider_for(&self, path: &str) -> Option<Arc<dyn DataProvider>> {
        let ext = &path[path.rfind('.')?..];
        self.providers
            .iter()
            .find(|p| p.supported_file_types().iter().any(|e| *e == ext))
            .cloned()
    }

    /// All extensions handled by registered providers
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = Vec::new();
        for provider in &self.providers {
            for ext in provider.supported_file_types() {
                if !extensions.contains(ext) {
                    extensions.push(*ext);
                }
            }
        }
        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::with_defaults(
            Arc::new(RecordingNotifier::new()),
            ProviderConfig::default(),
        )
    }

    #[test]
    fn test_routes_supported_extensions() {
        let registry = registry();
        assert!(registry.provider_for("config/.env").is_some());
        assert!(registry.provider_for("setup.ini").is_some());
        assert!(registry.provider_for("i18n/messages.properties").is_some());
    }

    #[test]
    fn test_unknown_extensions() {
        let registry = registry();
        assert!(registry.provider_for("data.csv").is_none());
        assert!(registry.provider_for("README").is_none());
        assert!(ProviderRegistry::new().provider_for("a.env").is_none());
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(
            registry().supported_extensions(),
            vec![".env", ".ini", ".properties"]
        );
    }
}
