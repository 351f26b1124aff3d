//! Setting declarations and their metadata
//!
//! A [`SettingDeclaration`] describes one configuration key: where its value
//! comes from, what default applies, and how it may be logged.
//!
//! ```rust
//! use envsettings::SettingDeclaration;
//!
//! let host = SettingDeclaration::new("POSTGRES_HOST")
//!     .default_value("localhost")
//!     .local_only()
//!     .log_value();
//!
//! let password = SettingDeclaration::new("POSTGRES_PASSWORD")
//!     .secret()
//!     .required();
//!
//! assert!(host.is_local_only());
//! assert!(password.is_secret());
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Metadata Enums
// =============================================================================

/// Which provider channel supplies the raw value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain environment value (default)
    #[default]
    Plain,

    /// Secret value. Never rendered in safe dumps.
    Secret,
}

/// Environments in which the declared default applies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentScope {
    /// Default applies everywhere (default)
    #[default]
    AllEnvironments,

    /// Default applies only when the process runs in a local context.
    ///
    /// Outside local contexts the setting stays unset unless its provider
    /// supplies a value.
    LocalOnly,
}

// =============================================================================
// Declaration
// =============================================================================

/// Static metadata for one configuration key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDeclaration {
    /// Symbolic name, also the name looked up in the provider
    name: String,

    /// Default value; empty means "no default"
    #[serde(default)]
    default_value: String,

    #[serde(default)]
    source: SourceKind,

    #[serde(default)]
    scope: EnvironmentScope,

    /// Whether the plain value may appear verbatim in safe dumps
    #[serde(default)]
    log_value: bool,

    /// Fail resolution when the provider has no value
    #[serde(default)]
    required: bool,
}

impl SettingDeclaration {
    /// Declare a plain, optional setting with no default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
            source: SourceKind::Plain,
            scope: EnvironmentScope::AllEnvironments,
            log_value: false,
            required: false,
        }
    }

    /// Set the default value used when the provider has nothing
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Read the value from the secret provider
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.source = SourceKind::Secret;
        self
    }

    /// Set the source kind explicitly
    #[must_use]
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    /// Only apply the default in local contexts
    #[must_use]
    pub fn local_only(mut self) -> Self {
        self.scope = EnvironmentScope::LocalOnly;
        self
    }

    /// Set the environment scope explicitly
    #[must_use]
    pub fn scope(mut self, scope: EnvironmentScope) -> Self {
        self.scope = scope;
        self
    }

    /// Allow the value to be shown in safe dumps (plain settings only)
    #[must_use]
    pub fn log_value(mut self) -> Self {
        self.log_value = true;
        self
    }

    /// Fail resolution if the provider has no value
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared default, `None` when empty
    pub fn declared_default(&self) -> Option<&str> {
        if self.default_value.is_empty() {
            None
        } else {
            Some(&self.default_value)
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source
    }

    pub fn environment_scope(&self) -> EnvironmentScope {
        self.scope
    }

    pub fn is_secret(&self) -> bool {
        self.source == SourceKind::Secret
    }

    pub fn is_local_only(&self) -> bool {
        self.scope == EnvironmentScope::LocalOnly
    }

    pub fn should_log_value(&self) -> bool {
        self.log_value
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let decl = SettingDeclaration::new("PLAIN");

        assert_eq!(decl.name(), "PLAIN");
        assert_eq!(decl.declared_default(), None);
        assert_eq!(decl.source_kind(), SourceKind::Plain);
        assert_eq!(decl.environment_scope(), EnvironmentScope::AllEnvironments);
        assert!(!decl.should_log_value());
        assert!(!decl.is_required());
    }

    #[test]
    fn test_modifiers() {
        let decl = SettingDeclaration::new("TOKEN")
            .default_value("abc")
            .secret()
            .local_only()
            .log_value()
            .required();

        assert_eq!(decl.declared_default(), Some("abc"));
        assert!(decl.is_secret());
        assert!(decl.is_local_only());
        assert!(decl.should_log_value());
        assert!(decl.is_required());
    }

    #[test]
    fn test_serde_names() {
        let decl = SettingDeclaration::new("DB_PASSWORD").secret().local_only();
        let json = serde_json::to_value(&decl).unwrap();

        assert_eq!(json["source"], "secret");
        assert_eq!(json["scope"], "local_only");

        let parsed: SettingDeclaration =
            serde_json::from_str(r#"{"name": "DB_NAME", "default_value": "some_db"}"#).unwrap();
        assert_eq!(parsed, SettingDeclaration::new("DB_NAME").default_value("some_db"));
    }
}
