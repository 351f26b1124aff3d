//! Redacted dump of resolved settings

use super::{ResolvedEntry, SettingsRegistry};
use log::info;

const SECRET: &str = "secret";
const NOT_WHITELISTED: &str = "not-whitelisted";
const EMPTY_SUFFIX: &str = " - empty";

impl ResolvedEntry {
    /// Value as it may appear in logs.
    ///
    /// Secrets render as `secret`, plain values without `log_value` as
    /// `not-whitelisted`; both get a ` - empty` suffix when unset or blank.
    /// Whitelisted plain values are shown verbatim.
    pub fn safe_value(&self) -> String {
        let declaration = self.declaration();
        let empty = self.present_value().is_none();

        let mut rendered = if declaration.is_secret() {
            SECRET.to_string()
        } else if declaration.should_log_value() {
            return self.value().unwrap_or_default().to_string();
        } else {
            NOT_WHITELISTED.to_string()
        };

        if empty {
            rendered.push_str(EMPTY_SUFFIX);
        }
        rendered
    }
}

impl SettingsRegistry {
    /// All settings as `NAME=value` lines, in declaration order, with
    /// secrets and non-whitelisted values redacted
    #[must_use]
    pub fn dump_safe(&self) -> String {
        self.entries()
            .map(|entry| format!("{}={}\n", entry.name(), entry.safe_value()))
            .collect()
    }

    /// Log every setting at info level using the same redaction as [`dump_safe`](Self::dump_safe)
    pub fn log_safe(&self) {
        for entry in self.entries() {
            info!("{}={}", entry.name(), entry.safe_value());
        }
    }
}
