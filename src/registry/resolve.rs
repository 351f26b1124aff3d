//! Environment classification and batch resolution

use super::{ResolvedEntry, SettingsRegistry, is_blank};
use crate::config::{SettingDeclaration, SettingsEnum, SourceKind};
use crate::error::{Error, Result};
use crate::providers::ValueProvider;
use log::{debug, info, warn};
use std::collections::HashSet;

impl SettingsRegistry {
    /// Whether the process runs in a local context.
    ///
    /// Reads the configured environment variable from the plain provider.
    /// Unset, blank, or equal to the local environment name (after trimming)
    /// means local. A provider error means not local.
    pub fn is_local(&self) -> bool {
        let variable = &self.config.environment_variable;

        match self.plain.lookup(variable) {
            Ok(value) => self.config.is_local_environment(value.as_deref()),
            Err(e) => {
                warn!("Could not read {variable}, assuming non-local environment: {e}");
                false
            }
        }
    }

    /// Resolve and register the declarations of a [`SettingsEnum`].
    ///
    /// # Errors
    ///
    /// See [`add_declarations`](Self::add_declarations).
    pub fn add_settings<E: SettingsEnum>(&mut self) -> Result<()> {
        self.add_declarations(E::declarations())
    }

    /// Resolve a batch of declarations and register the results.
    ///
    /// Declarations are resolved in order. The batch is committed only when
    /// every declaration resolved; on error the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// - `Error::MissingRequiredSetting` if a required declaration has no provider value
    /// - `Error::DuplicateSetting` if a name is already registered or repeats in the batch
    /// - any error returned by a provider lookup, unchanged
    pub fn add_declarations<I>(&mut self, declarations: I) -> Result<()>
    where
        I: IntoIterator<Item = SettingDeclaration>,
    {
        let is_local = self.is_local();
        debug!("Resolving settings batch (local: {is_local})");

        let mut batch = Vec::new();
        let mut seen = HashSet::new();

        for declaration in declarations {
            if self.index.contains_key(declaration.name())
                || !seen.insert(declaration.name().to_string())
            {
                return Err(Error::DuplicateSetting(declaration.name().to_string()));
            }

            batch.push(self.resolve_declaration(declaration, is_local)?);
        }

        let count = batch.len();
        for entry in batch {
            self.index.insert(entry.name().to_string(), self.entries.len());
            self.entries.push(entry);
        }

        info!("Loaded {count} settings");
        Ok(())
    }

    fn provider_for(&self, source: SourceKind) -> &dyn ValueProvider {
        match source {
            SourceKind::Plain => self.plain.as_ref(),
            SourceKind::Secret => self.secret.as_ref(),
        }
    }

    fn resolve_declaration(
        &self,
        declaration: SettingDeclaration,
        is_local: bool,
    ) -> Result<ResolvedEntry> {
        let name = declaration.name();
        let provider = self.provider_for(declaration.source_kind());

        let raw = provider.lookup(name)?.filter(|v| !is_blank(v));

        if declaration.is_required() && raw.is_none() {
            return Err(Error::MissingRequiredSetting(name.to_string()));
        }

        let value = match raw {
            Some(value) => {
                debug!("Setting {name} read from {}", provider.provider_name());
                Some(value)
            }
            None if declaration.is_local_only() && !is_local => {
                debug!("Setting {name} unset, local-only default skipped");
                None
            }
            None => {
                let default = declaration.declared_default().map(str::to_string);
                if default.is_some() {
                    debug!("Setting {name} using declared default");
                } else {
                    debug!("Setting {name} unset");
                }
                default
            }
        };

        Ok(ResolvedEntry::new(declaration, value))
    }
}
