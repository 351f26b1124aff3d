//! OS Keychain provider using keyring crate

use super::ValueProvider;
use crate::error::{Error, Result};
use keyring::Entry;
use log::{debug, warn};

/// Reads secret values from the OS keychain.
///
/// Each setting name is looked up as an entry of `service_name`.
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a new keychain provider
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn get_entry(&self, name: &str) -> Result<Entry> {
        Entry::new(&self.service_name, name).map_err(|e| {
            Error::provider(
                self.provider_name(),
                name,
                format!("Failed to create keychain entry: {e}"),
            )
        })
    }

    fn read_entry(&self, entry: &Entry, name: &str) -> Result<Option<String>> {
        match entry.get_password() {
            Ok(password) => {
                debug!("Secret retrieved from keychain: {name}");
                Ok(Some(password))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                warn!("Failed to retrieve secret from keychain: {e}");
                Err(Error::provider(
                    self.provider_name(),
                    name,
                    format!("Failed to retrieve secret: {e}"),
                ))
            }
        }
    }
}

impl ValueProvider for KeychainProvider {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        let entry = self.get_entry(name)?;
        self.read_entry(&entry, name)
    }

    fn provider_name(&self) -> &'static str {
        "keychain"
    }
}
