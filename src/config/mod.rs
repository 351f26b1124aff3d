//! Core configuration types and traits
//!
//! This module contains the foundational types for declaring settings:
//! - `SettingDeclaration` - Metadata for one setting (default, source, scope, flags)
//! - `SettingsEnum` - Trait for a batch of declarations
//! - `SettingName` - Anything that names a setting
//! - `RegistryConfig` - Environment classifier configuration

mod declaration;
mod key;
mod types;

pub use declaration::{EnvironmentScope, SettingDeclaration, SourceKind};
pub use key::{SettingName, SettingsEnum};
pub use types::{
    DEFAULT_ENVIRONMENT_VARIABLE, DEFAULT_LOCAL_ENVIRONMENT, RegistryConfig, RegistryConfigBuilder,
};
