//! Settings registry module
//!
//! This module contains the [`SettingsRegistry`] struct which is the primary entry point
//! for resolving and reading settings.

mod accessors;
mod builder;
mod dump;
mod resolve;

pub use builder::SettingsRegistryBuilder;

use crate::config::{RegistryConfig, SettingDeclaration, SettingName};
use crate::providers::{EnvProvider, ValueProvider};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of resolved settings.
///
/// Settings are declared in batches. Each batch is resolved once against the
/// plain and secret providers, then read through the typed accessors:
///
/// - **Resolution**: provider value, else declared default (subject to scope)
/// - **Required settings**: a batch with a missing required value is rejected
/// - **Typed access**: string, integer and boolean accessors, with or without fallback
/// - **Safe dump**: one line per setting with secrets and non-whitelisted values redacted
///
/// # Example
///
/// ```rust
/// use envsettings::{MemoryProvider, SettingDeclaration, SettingsRegistry};
///
/// let mut registry = SettingsRegistry::builder()
///     .plain_provider(MemoryProvider::from_pairs([("PORT", "8080")]))
///     .secret_provider(MemoryProvider::new())
///     .build()?;
///
/// registry.add_declarations([
///     SettingDeclaration::new("PORT").log_value(),
///     SettingDeclaration::new("DB_NAME").default_value("some_db").log_value(),
///     SettingDeclaration::new("DB_PASSWORD").secret(),
/// ])?;
///
/// assert_eq!(registry.get_int("PORT")?, 8080);
/// assert_eq!(registry.get_string("DB_NAME")?, "some_db");
/// assert_eq!(
///     registry.dump_safe(),
///     "PORT=8080\nDB_NAME=some_db\nDB_PASSWORD=secret - empty\n"
/// );
/// # Ok::<(), envsettings::Error>(())
/// ```
///
/// # Concurrency
///
/// Resolution takes `&mut self`, so at most one batch is in flight per
/// registry. Committed entries are never mutated; the registry can be shared
/// across threads for reading once resolution is done.
pub struct SettingsRegistry {
    config: RegistryConfig,

    /// Provider for `SourceKind::Plain` settings and the environment classifier
    plain: Arc<dyn ValueProvider>,

    /// Provider for `SourceKind::Secret` settings
    secret: Arc<dyn ValueProvider>,

    /// Resolved entries in insertion order
    entries: Vec<ResolvedEntry>,

    /// Name -> position in `entries`
    index: HashMap<String, usize>,
}

impl SettingsRegistry {
    /// Create a builder for configuring a registry
    pub fn builder() -> SettingsRegistryBuilder {
        SettingsRegistryBuilder::new()
    }

    /// Create an empty registry from a config and two providers
    pub fn new(
        config: RegistryConfig,
        plain: Arc<dyn ValueProvider>,
        secret: Arc<dyn ValueProvider>,
    ) -> Self {
        Self {
            config,
            plain,
            secret,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolved entry for `key`, if it was declared
    pub fn entry<K: SettingName + ?Sized>(&self, key: &K) -> Option<&ResolvedEntry> {
        self.index
            .get(key.setting_name())
            .map(|&position| &self.entries[position])
    }

    /// All resolved entries in the order they were declared
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &ResolvedEntry> {
        self.entries.iter()
    }

    pub fn contains<K: SettingName + ?Sized>(&self, key: &K) -> bool {
        self.index.contains_key(key.setting_name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SettingsRegistry {
    /// Registry reading both plain and secret values from the process environment
    fn default() -> Self {
        Self::new(
            RegistryConfig::default(),
            Arc::new(EnvProvider::new()),
            Arc::new(EnvProvider::new()),
        )
    }
}

impl fmt::Debug for SettingsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsRegistry")
            .field("config", &self.config)
            .field("plain", &self.plain.provider_name())
            .field("secret", &self.secret.provider_name())
            .field("entries", &self.entries)
            .finish()
    }
}

// =============================================================================
// Resolved Entry
// =============================================================================

/// Outcome of resolving one declaration
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    declaration: SettingDeclaration,

    /// Effective value; `None` when neither provider nor default supplied one
    value: Option<String>,
}

impl ResolvedEntry {
    pub(crate) fn new(declaration: SettingDeclaration, value: Option<String>) -> Self {
        Self { declaration, value }
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    /// Resolved value as stored, possibly blank
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Resolved value, `None` when absent or blank
    pub fn present_value(&self) -> Option<&str> {
        self.value().filter(|v| !is_blank(v))
    }

    pub fn declaration(&self) -> &SettingDeclaration {
        &self.declaration
    }
}

impl fmt::Debug for ResolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedEntry")
            .field("name", &self.name())
            .field("value", &self.safe_value())
            .field("source", &self.declaration.source_kind())
            .field("scope", &self.declaration.environment_scope())
            .finish()
    }
}

/// Blank means empty or whitespace-only
#[inline]
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
