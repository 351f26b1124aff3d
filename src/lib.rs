//! # envsettings - Typed Environment Settings
//!
//! A typed settings registry that resolves environment variables and secrets
//! from declared metadata, once, at startup.
//!
//! ## Features
//!
//! - **Declarations**: Per-setting default, source (plain or secret), environment scope, logging and required flags
//! - **Local-only Defaults**: Defaults that apply on developer machines but never in deployed environments
//! - **Required Settings**: Fail fast at startup when a required value is missing
//! - **Typed Accessors**: String, integer and boolean getters, with or without fallbacks
//! - **Safe Dump**: Log all settings without leaking secrets
//! - **Pluggable Providers**: Environment, in-memory, OS keychain (requires `keychain` feature), or any closure
//!
//! ## Quick Start
//!
//! ```rust
//! use envsettings::{MemoryProvider, SettingDeclaration, SettingsRegistry};
//!
//! let registry = SettingsRegistry::builder()
//!     .plain_provider(MemoryProvider::from_pairs([("POSTGRES_PORT", "6543")]))
//!     .secret_provider(MemoryProvider::from_pairs([("POSTGRES_PASSWORD", "hunter2")]))
//!     .with_declarations([
//!         SettingDeclaration::new("POSTGRES_HOST")
//!             .default_value("localhost")
//!             .local_only()
//!             .log_value(),
//!         SettingDeclaration::new("POSTGRES_PORT")
//!             .default_value("5432")
//!             .local_only()
//!             .log_value(),
//!         SettingDeclaration::new("POSTGRES_PASSWORD").secret().required(),
//!     ])
//!     .build()?;
//!
//! assert_eq!(registry.get_string("POSTGRES_HOST")?, "localhost");
//! assert_eq!(registry.get_int("POSTGRES_PORT")?, 6543);
//! assert!(!registry.dump_safe().contains("hunter2"));
//! # Ok::<(), envsettings::Error>(())
//! ```
//!
//! ## Resolution Rules
//!
//! For each declaration, in order:
//!
//! 1. The value is read from the plain or secret provider. A blank value counts as unset.
//! 2. A required declaration with no provider value fails the whole batch.
//! 3. Without a provider value, the declared default applies, except for
//!    local-only declarations outside a local context, which stay unset.
//!
//! The environment is local when the classifier variable (default
//! `APP_ENVIRONMENT`) is unset, blank, or equal to `Development`.
//!
//! A batch either resolves completely or leaves the registry untouched.
//!
//! ## Declaring Settings with an Enum
//!
//! With the `derive` feature, a fieldless enum can declare a batch:
//!
//! ```rust,ignore
//! use envsettings::{DeriveSettingsEnum, SettingsRegistry};
//!
//! #[derive(DeriveSettingsEnum)]
//! enum GlobalSettings {
//!     #[setting(log)]
//!     APP_ENVIRONMENT,
//!     #[setting(default = "localhost", local_only, log)]
//!     POSTGRES_HOST,
//!     #[setting(default = "super_secret", local_only, secret)]
//!     POSTGRES_PASSWORD,
//! }
//!
//! let mut registry = SettingsRegistry::default();
//! registry.add_settings::<GlobalSettings>()?;
//! let host = registry.get_string(&GlobalSettings::POSTGRES_HOST)?;
//! ```

mod error;
mod registry;

pub mod config;
pub mod providers;

pub use error::{Error, Result};
pub use registry::{ResolvedEntry, SettingsRegistry, SettingsRegistryBuilder};

// Re-exports from config
pub use config::{
    EnvironmentScope, RegistryConfig, RegistryConfigBuilder, SettingDeclaration, SettingName,
    SettingsEnum, SourceKind,
};

// Provider re-exports (KeychainProvider requires `keychain` feature)
#[cfg(feature = "keychain")]
pub use providers::KeychainProvider;
pub use providers::{EnvProvider, MemoryProvider, ValueProvider};

// Derive macro re-export (requires `derive` feature)
/// Derive macro for generating `SettingsEnum` and `SettingName` implementations.
///
/// # Example
///
/// ```rust,ignore
/// use envsettings::DeriveSettingsEnum;
///
/// #[derive(DeriveSettingsEnum)]
/// enum ApiSettings {
///     #[setting(default = "https://api.example.com", log)]
///     ApiUrl,
///     #[setting(secret, required)]
///     ApiKey,
/// }
/// ```
#[cfg(feature = "derive")]
pub use envsettings_derive::SettingsEnum as DeriveSettingsEnum;
