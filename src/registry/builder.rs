//! Builder for SettingsRegistry
//!
//! This module contains [`SettingsRegistryBuilder`] which provides a fluent API
//! for creating a [`SettingsRegistry`](super::SettingsRegistry).

use crate::config::{RegistryConfigBuilder, SettingDeclaration, SettingsEnum};
use crate::error::Result;
use crate::providers::{EnvProvider, ValueProvider};
use std::sync::Arc;

use super::SettingsRegistry;

/// Builder for creating a [`SettingsRegistry`] with a fluent API.
///
/// Providers default to the process environment. Batches registered with
/// [`with_settings`](Self::with_settings) or
/// [`with_declarations`](Self::with_declarations) are resolved in order by
/// [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use envsettings::{MemoryProvider, SettingDeclaration, SettingsRegistry};
///
/// let registry = SettingsRegistry::builder()
///     .environment_variable("DEPLOY_ENV")
///     .plain_provider(MemoryProvider::from_pairs([("DEPLOY_ENV", "Production")]))
///     .secret_provider(MemoryProvider::new())
///     .with_declarations([SettingDeclaration::new("HOST").default_value("localhost").local_only()])
///     .build()
///     .unwrap();
///
/// assert!(!registry.is_local());
/// assert_eq!(registry.get_string_or("HOST", "db.internal"), "db.internal");
/// ```
#[derive(Default)]
pub struct SettingsRegistryBuilder {
    config_builder: RegistryConfigBuilder,
    plain: Option<Arc<dyn ValueProvider>>,
    secret: Option<Arc<dyn ValueProvider>>,
    batches: Vec<Vec<SettingDeclaration>>,
}

impl SettingsRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plain variable read by the environment classifier.
    pub fn environment_variable(mut self, name: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.environment_variable(name);
        self
    }

    /// Set the environment name treated as local (default: "Development").
    pub fn local_environment(mut self, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.local_environment(value);
        self
    }

    /// Provider for plain settings and the environment classifier.
    pub fn plain_provider<P: ValueProvider + 'static>(mut self, provider: P) -> Self {
        self.plain = Some(Arc::new(provider));
        self
    }

    /// Shared provider for plain settings, for callers that keep a handle to it.
    pub fn plain_provider_arc(mut self, provider: Arc<dyn ValueProvider>) -> Self {
        self.plain = Some(provider);
        self
    }

    /// Provider for secret settings.
    pub fn secret_provider<P: ValueProvider + 'static>(mut self, provider: P) -> Self {
        self.secret = Some(Arc::new(provider));
        self
    }

    /// Shared provider for secret settings.
    pub fn secret_provider_arc(mut self, provider: Arc<dyn ValueProvider>) -> Self {
        self.secret = Some(provider);
        self
    }

    /// Register the declarations of a [`SettingsEnum`] as one batch.
    pub fn with_settings<E: SettingsEnum>(mut self) -> Self {
        self.batches.push(E::declarations());
        self
    }

    /// Register a batch of declarations.
    pub fn with_declarations<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = SettingDeclaration>,
    {
        self.batches.push(declarations.into_iter().collect());
        self
    }

    /// Build the [`SettingsRegistry`].
    ///
    /// Each registered batch is resolved in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error of any batch.
    pub fn build(self) -> Result<SettingsRegistry> {
        let plain = self
            .plain
            .unwrap_or_else(|| Arc::new(EnvProvider::new()));
        let secret = self
            .secret
            .unwrap_or_else(|| Arc::new(EnvProvider::new()));

        let mut registry = SettingsRegistry::new(self.config_builder.build(), plain, secret);

        for batch in self.batches {
            registry.add_declarations(batch)?;
        }

        Ok(registry)
    }
}
