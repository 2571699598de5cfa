//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_loottally_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("loottally") && path_str.ends_with("config.toml"),
            "Path should contain 'loottally' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_loottally_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("loottally.log"),
        "Default log path should end with 'loottally.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("loottally_test_config.toml");

    let toml_content = r#"
destroy_silver = false
destroy_copper = true
destroy_fine_steel = false
values_path = "/data/values.txt"
format = "json"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.destroy_silver, Some(false));
    assert_eq!(config.destroy_copper, Some(true));
    assert_eq!(config.destroy_fine_steel, Some(false));
    assert_eq!(config.values_path, Some(PathBuf::from("/data/values.txt")));
    assert_eq!(config.format, Some(OutputFormat::Json));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("loottally_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = env::temp_dir().join("loottally_test_unknown_field.toml");
    fs::write(&config_path, "destroy_gold = true\n").expect("Failed to write config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn default_policy_destroys_silver_copper_and_fine_steel() {
    let resolved = ResolvedConfig::default();
    assert_eq!(resolved.policy, DestroyPolicy::default());
    assert_eq!(resolved.values_path, PathBuf::from(DEFAULT_VALUES_PATH));
    assert_eq!(resolved.format, OutputFormat::Text);
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        destroy_copper: Some(false),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert!(resolved.policy.destroy_silver);
    assert!(!resolved.policy.destroy_copper);
    assert!(resolved.policy.destroy_fine_steel);
    assert_eq!(resolved.values_path, PathBuf::from(DEFAULT_VALUES_PATH));
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let config_file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.log_file_path, custom_path);
}

#[test]
fn cli_keep_flags_turn_destruction_off() {
    let resolved = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            keep_silver: true,
            keep_fine_steel: true,
            ..CliOverrides::default()
        },
    );

    assert!(!resolved.policy.destroy_silver);
    assert!(resolved.policy.destroy_copper);
    assert!(!resolved.policy.destroy_fine_steel);
}

#[test]
fn cli_without_flags_keeps_config_file_policy() {
    let merged = merge_config(Some(ConfigFile {
        destroy_silver: Some(false),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(merged.clone(), CliOverrides::default());
    assert_eq!(resolved, merged);
}

#[test]
fn cli_values_and_format_override_config_file() {
    let merged = merge_config(Some(ConfigFile {
        values_path: Some(PathBuf::from("/from/config.txt")),
        format: Some(OutputFormat::Text),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(
        merged,
        CliOverrides {
            values_path: Some(PathBuf::from("/from/cli.txt")),
            format: Some(OutputFormat::Json),
            ..CliOverrides::default()
        },
    );

    assert_eq!(resolved.values_path, PathBuf::from("/from/cli.txt"));
    assert_eq!(resolved.format, OutputFormat::Json);
}

/// RAII guard that removes an environment variable on drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(loottally_values)]
fn apply_env_overrides_respects_loottally_values() {
    let _guard = EnvGuard::new(ENV_VALUES);

    env::set_var(ENV_VALUES, "/env/values.txt");
    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.values_path, PathBuf::from("/env/values.txt"));
}

#[test]
#[serial(loottally_values)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ENV_VALUES);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(loottally_values)]
fn cli_values_path_beats_env_var() {
    let _guard = EnvGuard::new(ENV_VALUES);
    env::set_var(ENV_VALUES, "/env/values.txt");

    let with_env = apply_env_overrides(ResolvedConfig::default());
    let resolved = apply_cli_overrides(
        with_env,
        CliOverrides {
            values_path: Some(PathBuf::from("/cli/values.txt")),
            ..CliOverrides::default()
        },
    );

    assert_eq!(resolved.values_path, PathBuf::from("/cli/values.txt"));
}

#[test]
#[serial(loottally_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("loottally_explicit.toml");
    fs::write(&explicit_path, "destroy_silver = false\n").expect("write explicit config");

    let env_path = temp_dir.join("loottally_env.toml");
    fs::write(&env_path, "destroy_silver = true\n").expect("write env config");
    env::set_var(ENV_CONFIG, &env_path);

    let result = load_config_with_precedence(Some(explicit_path.clone()));
    fs::remove_file(&explicit_path).ok();
    fs::remove_file(&env_path).ok();

    let config = result
        .expect("explicit config should load")
        .expect("explicit config exists");
    assert_eq!(
        config.destroy_silver,
        Some(false),
        "Should use explicit path, not LOOTTALLY_CONFIG"
    );
}

#[test]
#[serial(loottally_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let env_path = env::temp_dir().join("loottally_env_only.toml");
    fs::write(&env_path, "destroy_copper = false\n").expect("write env config");
    env::set_var(ENV_CONFIG, &env_path);

    let result = load_config_with_precedence(None);
    fs::remove_file(&env_path).ok();

    let config = result
        .expect("env config should load")
        .expect("env config exists");
    assert_eq!(config.destroy_copper, Some(false));
}
