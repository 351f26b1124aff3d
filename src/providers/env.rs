//! Process environment provider

use super::ValueProvider;
use crate::error::{Error, Result};
use std::env::{self, VarError};

/// Reads values from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl EnvProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ValueProvider for EnvProvider {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::provider(
                self.provider_name(),
                name,
                "value is not valid unicode",
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
