//! Error types for envsettings library

use thiserror::Error;

/// Result type alias for envsettings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for envsettings library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Resolution Errors
    // -------------------------------------------------------------------------
    /// A `required` declaration had no value from its provider.
    #[error("Missing required environment setting: {0}")]
    MissingRequiredSetting(String),

    /// The same symbolic name was declared twice for one registry.
    #[error("Duplicate setting declaration: {0}")]
    DuplicateSetting(String),

    // -------------------------------------------------------------------------
    // Accessor Errors
    // -------------------------------------------------------------------------
    #[error("Setting not loaded: {0}")]
    SettingNotLoaded(String),

    #[error("Could not parse setting to {expected}: {key}")]
    Parse { key: String, expected: &'static str },

    // -------------------------------------------------------------------------
    // Provider Errors
    // -------------------------------------------------------------------------
    #[error("{provider} provider failed to read '{name}': {reason}")]
    Provider {
        provider: &'static str,
        name: String,
        reason: String,
    },
}

impl Error {
    /// Build a provider error for `name`
    pub fn provider(provider: &'static str, name: &str, reason: impl Into<String>) -> Self {
        Error::Provider {
            provider,
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error means a setting had no usable value
    #[must_use]
    pub fn is_not_loaded(&self) -> bool {
        matches!(
            self,
            Error::SettingNotLoaded(_) | Error::MissingRequiredSetting(_)
        )
    }

    /// Check if this error was raised while resolving a batch
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredSetting(_) | Error::DuplicateSetting(_) | Error::Provider { .. }
        )
    }

    /// Name of the setting this error is about
    #[must_use]
    pub fn setting_name(&self) -> &str {
        match self {
            Error::MissingRequiredSetting(name)
            | Error::DuplicateSetting(name)
            | Error::SettingNotLoaded(name) => name,
            Error::Parse { key, .. } => key,
            Error::Provider { name, .. } => name,
        }
    }
}
