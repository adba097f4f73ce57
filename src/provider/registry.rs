//! Language dispatch table.
//!
//! Maps a lower-cased language key to its provider. Built once at startup
//! and only read while serving requests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::{CommandProvider, DocProvider, GoDocProvider, go};
use crate::config::ProvidersConfig;

#[derive(Default, Clone)]
pub struct LanguageRegistry {
    providers: HashMap<String, Arc<dyn DocProvider>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from configuration. Every enabled language gets a
    /// provider; `go` with the stock `godoc` command uses [`GoDocProvider`].
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut registry = Self::new();

        for (language, provider) in &config.languages {
            if !provider.enabled {
                crate::debug_event!("registry", "disabled", "{language}");
                continue;
            }

            let key = language.to_lowercase();
            let replaced = if key == go::LANGUAGE && provider.args == go::GODOC_ARGS {
                registry.register(
                    &key,
                    GoDocProvider::with_command(provider.command.clone(), timeout),
                )
            } else {
                registry.register(
                    &key,
                    CommandProvider::new(provider.command.clone(), provider.args.clone())
                        .with_timeout(timeout),
                )
            };
            if let Some(previous) = replaced {
                tracing::warn!(
                    "[registry] language '{language}' overrides an earlier entry for '{key}' ({})",
                    previous.tool()
                );
            }
            crate::debug_event!("registry", "registered", "{key} -> {}", provider.command);
        }

        registry
    }

    /// Register a provider, returning the one it replaced for the language.
    pub fn register(
        &mut self,
        language: &str,
        provider: impl DocProvider + 'static,
    ) -> Option<Arc<dyn DocProvider>> {
        self.providers
            .insert(language.to_lowercase(), Arc::new(provider))
    }

    /// Case-insensitive lookup.
    pub fn get(&self, language: &str) -> Option<Arc<dyn DocProvider>> {
        self.providers.get(&language.to_lowercase()).cloned()
    }

    /// Registered language keys, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.providers.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
