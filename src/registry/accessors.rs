//! Typed accessors
//!
//! Every accessor takes a setting name or anything implementing
//! [`SettingName`]. The `_or` variants substitute the caller's default only
//! when the setting is missing or blank; a present value that does not parse
//! is still an error.

use super::SettingsRegistry;
use crate::config::SettingName;
use crate::error::{Error, Result};

impl SettingsRegistry {
    /// Non-blank resolved value for `name`
    fn present(&self, name: &str) -> Option<&str> {
        self.entry(name).and_then(|entry| entry.present_value())
    }

    /// Get a setting as a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::SettingNotLoaded` if the setting was never declared or
    /// resolved to no value.
    pub fn get_string<K: SettingName + ?Sized>(&self, key: &K) -> Result<&str> {
        let name = key.setting_name();
        self.present(name)
            .ok_or_else(|| Error::SettingNotLoaded(name.to_string()))
    }

    /// Get a setting as a string, falling back to `default`
    pub fn get_string_or<'a, K: SettingName + ?Sized>(
        &'a self,
        key: &K,
        default: &'a str,
    ) -> &'a str {
        self.present(key.setting_name()).unwrap_or(default)
    }

    /// Get a setting as a base-10, 32-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns `Error::SettingNotLoaded` if there is no value, or
    /// `Error::Parse` if the value is not an integer or is out of `i32` range.
    pub fn get_int<K: SettingName + ?Sized>(&self, key: &K) -> Result<i32> {
        let name = key.setting_name();
        parse_int(name, self.get_string(name)?)
    }

    /// Get a setting as an integer, falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if a value is present but is not an integer.
    pub fn get_int_or<K: SettingName + ?Sized>(&self, key: &K, default: i32) -> Result<i32> {
        let name = key.setting_name();
        self.present(name)
            .map_or(Ok(default), |value| parse_int(name, value))
    }

    /// Get a setting as a boolean (`true`/`false`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `Error::SettingNotLoaded` if there is no value, or
    /// `Error::Parse` for any other token.
    pub fn get_bool<K: SettingName + ?Sized>(&self, key: &K) -> Result<bool> {
        let name = key.setting_name();
        parse_bool(name, self.get_string(name)?)
    }

    /// Get a setting as a boolean, falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if a value is present but is not a boolean.
    pub fn get_bool_or<K: SettingName + ?Sized>(&self, key: &K, default: bool) -> Result<bool> {
        let name = key.setting_name();
        self.present(name)
            .map_or(Ok(default), |value| parse_bool(name, value))
    }
}

fn parse_int(name: &str, value: &str) -> Result<i32> {
    value.trim().parse::<i32>().map_err(|_| Error::Parse {
        key: name.to_string(),
        expected: "int",
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::Parse {
            key: name.to_string(),
            expected: "bool",
        })
    }
}
