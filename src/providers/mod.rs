//! Value providers
//!
//! A provider answers one question: what is the raw value for this name?
//! The registry holds two of them, one for plain settings and one for secrets.
//!
//! - **Env**: process environment variables (default for both slots)
//! - **Memory**: in-memory map, for testing and static values
//! - **Keychain**: OS-level secure storage - requires `keychain` feature
//!
//! Closures work as providers too:
//!
//! ```rust
//! use envsettings::{Result, ValueProvider};
//!
//! let provider = |name: &str| -> Result<Option<String>> {
//!     Ok((name == "PORT").then(|| "8080".to_string()))
//! };
//!
//! assert_eq!(provider.lookup("PORT").unwrap().as_deref(), Some("8080"));
//! assert_eq!(provider.lookup("HOST").unwrap(), None);
//! ```

mod env;
#[cfg(feature = "keychain")]
mod keychain;
mod memory;

pub use env::EnvProvider;
#[cfg(feature = "keychain")]
pub use keychain::KeychainProvider;
pub use memory::MemoryProvider;

use crate::error::Result;

/// Trait for raw value sources
pub trait ValueProvider: Send + Sync {
    /// Look up the raw value for `name`
    ///
    /// `Ok(None)` means the provider has no value. An empty string is
    /// treated the same way by the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails to answer.
    fn lookup(&self, name: &str) -> Result<Option<String>>;

    /// Provider name for logging/debugging
    fn provider_name(&self) -> &'static str {
        "custom"
    }
}

impl<F> ValueProvider for F
where
    F: Fn(&str) -> Result<Option<String>> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        self(name)
    }
}
