//! Naming settings for lookups and registration

use super::SettingDeclaration;

/// Anything that identifies a setting by its symbolic name.
///
/// Accessors accept plain strings as well as declarations and enums
/// generated by `#[derive(SettingsEnum)]`.
pub trait SettingName {
    fn setting_name(&self) -> &str;
}

impl SettingName for str {
    fn setting_name(&self) -> &str {
        self
    }
}

impl SettingName for String {
    fn setting_name(&self) -> &str {
        self
    }
}

impl SettingName for SettingDeclaration {
    fn setting_name(&self) -> &str {
        self.name()
    }
}

impl<T: SettingName + ?Sized> SettingName for &T {
    fn setting_name(&self) -> &str {
        (**self).setting_name()
    }
}

/// A source of one batch of declarations.
///
/// Usually implemented with `#[derive(SettingsEnum)]` on a fieldless enum,
/// one variant per setting:
///
/// ```rust
/// use envsettings::{SettingDeclaration, SettingsEnum};
///
/// struct DatabaseSettings;
///
/// impl SettingsEnum for DatabaseSettings {
///     fn declarations() -> Vec<SettingDeclaration> {
///         vec![
///             SettingDeclaration::new("DB_HOST").default_value("localhost").local_only(),
///             SettingDeclaration::new("DB_PASSWORD").secret(),
///         ]
///     }
/// }
///
/// assert_eq!(DatabaseSettings::declarations().len(), 2);
/// ```
pub trait SettingsEnum {
    /// Declarations in the order they should be resolved
    fn declarations() -> Vec<SettingDeclaration>;
}
