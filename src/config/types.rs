//! Registry configuration

/// Default variable read to classify the runtime environment
pub const DEFAULT_ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Default value of the environment variable that means "local"
pub const DEFAULT_LOCAL_ENVIRONMENT: &str = "Development";

/// Configuration for the environment classifier of a [`SettingsRegistry`](crate::SettingsRegistry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Plain variable holding the environment name
    pub environment_variable: String,

    /// Environment name that counts as local (exact match after trimming)
    pub local_environment: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            environment_variable: DEFAULT_ENVIRONMENT_VARIABLE.into(),
            local_environment: DEFAULT_LOCAL_ENVIRONMENT.into(),
        }
    }
}

impl RegistryConfig {
    /// Create a new builder for RegistryConfig
    ///
    /// # Example
    /// ```rust
    /// use envsettings::RegistryConfig;
    ///
    /// let config = RegistryConfig::builder()
    ///     .environment_variable("DEPLOY_ENV")
    ///     .local_environment("dev")
    ///     .build();
    ///
    /// assert_eq!(config.environment_variable, "DEPLOY_ENV");
    /// ```
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::new()
    }

    /// Whether an environment name denotes a local context.
    ///
    /// Unset and blank names are local.
    pub fn is_local_environment(&self, value: Option<&str>) -> bool {
        match value.map(str::trim) {
            None | Some("") => true,
            Some(name) => name == self.local_environment,
        }
    }
}

/// Builder for creating RegistryConfig with a fluent API
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plain variable read by the environment classifier
    pub fn environment_variable(mut self, name: impl Into<String>) -> Self {
        self.config.environment_variable = name.into();
        self
    }

    /// Set the environment name treated as local
    pub fn local_environment(mut self, value: impl Into<String>) -> Self {
        self.config.local_environment = value.into();
        self
    }

    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
