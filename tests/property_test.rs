//! Property-based tests for settings resolution.
//!
//! These tests check the resolution rules over randomly generated names,
//! values and environments:
//! - Global defaults apply regardless of environment
//! - Local-only defaults never apply outside local environments
//! - Required settings fail regardless of defaults
//! - Secret values never reach the safe dump

use envsettings::{Error, MemoryProvider, SettingDeclaration, SettingsRegistry};
use proptest::prelude::*;

/// Strategy for setting names that never collide with the classifier variable.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{2,20}".prop_map(|s| format!("SETTING_{s}"))
}

/// Strategy for non-blank values.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#%^&*._-]{1,32}"
}

/// Strategy for environment names that are not local.
fn deployed_environment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Production".to_string()),
        Just("Staging".to_string()),
        Just("development".to_string()),
        "[A-Z][a-z]{3,10}"
            .prop_filter("must not be the local name", |s| s != "Development"),
    ]
}

/// Environment name, `None` meaning unset
fn any_environment_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Development".to_string())),
        deployed_environment_strategy().prop_map(Some),
    ]
}

fn registry_in(environment: Option<&str>, secret: MemoryProvider) -> SettingsRegistry {
    let plain = MemoryProvider::new();
    if let Some(environment) = environment {
        plain.set("APP_ENVIRONMENT", environment);
    }
    SettingsRegistry::builder()
        .plain_provider(plain)
        .secret_provider(secret)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_global_default_always_applies(
        name in name_strategy(),
        default in value_strategy(),
        environment in any_environment_strategy(),
        secret in any::<bool>(),
    ) {
        let mut registry = registry_in(environment.as_deref(), MemoryProvider::new());
        let mut declaration = SettingDeclaration::new(name.clone()).default_value(default.clone());
        if secret {
            declaration = declaration.secret();
        }
        registry.add_declarations([declaration]).unwrap();

        prop_assert_eq!(registry.get_string(&name).unwrap(), default.as_str());
    }

    #[test]
    fn prop_local_only_default_suppressed_when_deployed(
        name in name_strategy(),
        default in value_strategy(),
        environment in deployed_environment_strategy(),
        fallback in value_strategy(),
    ) {
        let mut registry = registry_in(Some(environment.as_str()), MemoryProvider::new());
        registry
            .add_declarations([SettingDeclaration::new(name.clone())
                .default_value(default)
                .local_only()])
            .unwrap();

        prop_assert!(!registry.is_local());
        prop_assert!(matches!(registry.get_string(&name), Err(Error::SettingNotLoaded(_))));
        prop_assert_eq!(registry.get_string_or(&name, &fallback), fallback.as_str());
    }

    #[test]
    fn prop_required_ignores_default(
        name in name_strategy(),
        default in proptest::option::of(value_strategy()),
        environment in any_environment_strategy(),
    ) {
        let mut registry = registry_in(environment.as_deref(), MemoryProvider::new());
        let mut declaration = SettingDeclaration::new(name.clone()).required();
        if let Some(default) = default {
            declaration = declaration.default_value(default);
        }

        let result = registry.add_declarations([declaration]);
        prop_assert!(matches!(result, Err(Error::MissingRequiredSetting(ref n)) if *n == name));
        prop_assert!(registry.is_empty());
    }

    #[test]
    fn prop_int_round_trip(name in name_strategy(), number in any::<i32>()) {
        let mut registry = registry_in(None, MemoryProvider::new());
        registry
            .add_declarations([SettingDeclaration::new(name.clone())
                .default_value(number.to_string())])
            .unwrap();

        prop_assert_eq!(registry.get_int(&name).unwrap(), number);
        prop_assert!(registry.get_bool(&name).is_err());
    }

    #[test]
    fn prop_secret_never_dumped(
        name in name_strategy(),
        value in "[a-z][a-zA-Z0-9]{11,31}",
        log_value in any::<bool>(),
    ) {
        let secrets = MemoryProvider::from_pairs([(name.clone(), value.clone())]);
        let mut registry = registry_in(None, secrets);
        let mut declaration = SettingDeclaration::new(name.clone()).secret();
        if log_value {
            declaration = declaration.log_value();
        }
        registry.add_declarations([declaration]).unwrap();

        let dump = registry.dump_safe();
        prop_assert!(!dump.contains(&value));
        prop_assert_eq!(dump, format!("{name}=secret\n"));
    }
}
