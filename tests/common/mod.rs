//! Common test utilities for envsettings integration tests
//!
//! Provides shared declarations, provider fixtures, and helper functions.

#![allow(dead_code)]

use envsettings::{
    MemoryProvider, SettingDeclaration, SettingsEnum, SettingsRegistry, SettingsRegistryBuilder,
};
use std::sync::Arc;

// =============================================================================
// Test Declarations
// =============================================================================

/// A settings batch covering every combination of metadata the registry handles
pub struct TestSettings;

impl SettingsEnum for TestSettings {
    fn declarations() -> Vec<SettingDeclaration> {
        vec![
            SettingDeclaration::new("SETTING_WITH_NO_METADATA"),
            SettingDeclaration::new("SOME_STRING_SETTING")
                .default_value("some string")
                .log_value(),
            SettingDeclaration::new("SOME_INT_SETTING")
                .default_value("42")
                .log_value(),
            SettingDeclaration::new("SOME_BOOL_SETTING_TRUE")
                .default_value("true")
                .log_value(),
            SettingDeclaration::new("SOME_BOOL_SETTING_FALSE")
                .default_value("false")
                .log_value(),
            SettingDeclaration::new("SETTING_WITH_NO_DEFAULT_VALUE").log_value(),
            SettingDeclaration::new("SECRET_WITH_LOCAL_DEFAULT")
                .default_value("test_secret_local_only_default")
                .secret()
                .local_only(),
            SettingDeclaration::new("SECRET_WITH_GLOBAL_DEFAULT")
                .default_value("test_secret_all_environment_default")
                .secret(),
            SettingDeclaration::new("SOME_SECRET").secret(),
        ]
    }
}

/// A second batch with names disjoint from [`TestSettings`]
pub struct AltSettings;

impl SettingsEnum for AltSettings {
    fn declarations() -> Vec<SettingDeclaration> {
        vec![
            SettingDeclaration::new("SOME_STRING_SETTING_ALT")
                .default_value("foo")
                .log_value(),
            SettingDeclaration::new("SOME_INT_SETTING_ALT")
                .default_value("777")
                .log_value(),
        ]
    }
}

// =============================================================================
// Fixture
// =============================================================================

/// Registry backed by memory providers that stay reachable from the test
pub struct TestFixture {
    pub plain: Arc<MemoryProvider>,
    pub secret: Arc<MemoryProvider>,
}

impl TestFixture {
    /// Fixture running in a local environment (classifier variable unset)
    pub fn local() -> Self {
        init_logging();
        Self {
            plain: Arc::new(MemoryProvider::new()),
            secret: Arc::new(MemoryProvider::new()),
        }
    }

    /// Fixture running in the named environment
    pub fn in_environment(environment: &str) -> Self {
        let fixture = Self::local();
        fixture.plain.set("APP_ENVIRONMENT", environment);
        fixture
    }

    pub fn builder(&self) -> SettingsRegistryBuilder {
        SettingsRegistry::builder()
            .plain_provider_arc(self.plain.clone())
            .secret_provider_arc(self.secret.clone())
    }

    /// Empty registry wired to the fixture providers
    pub fn registry(&self) -> SettingsRegistry {
        self.builder().build().unwrap()
    }

    /// Registry with [`TestSettings`] already resolved
    pub fn loaded(&self) -> SettingsRegistry {
        self.builder().with_settings::<TestSettings>().build().unwrap()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
