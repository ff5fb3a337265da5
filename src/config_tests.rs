use super::*;

#[test]
fn default_config_has_c_family_extensions() {
    let config = Config::default();
    assert!(config.extensions.iter().any(|e| e == "java"));
    assert!(config.extensions.iter().any(|e| e == "c"));
    assert!(config.include_paths.is_empty());
    assert!(config.exclude.patterns.is_empty());
}

#[test]
fn parse_full_config() {
    let toml = r#"
extensions = ["java"]
include_paths = ["src"]

[exclude]
patterns = ["**/build/**"]
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.extensions, vec!["java".to_string()]);
    assert_eq!(config.include_paths, vec!["src".to_string()]);
    assert_eq!(config.exclude.patterns, vec!["**/build/**".to_string()]);
}

#[test]
fn parse_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parse_partial_config_keeps_default_extensions() {
    let toml = r#"
[exclude]
patterns = ["**/vendor/**"]
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.extensions, Config::default().extensions);
    assert_eq!(config.exclude.patterns, vec!["**/vendor/**".to_string()]);
}

#[test]
fn unknown_fields_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("max_lines = 500");
    assert!(result.is_err());
}

#[test]
fn validate_rejects_bad_glob() {
    let config = Config {
        exclude: ExcludeConfig {
            patterns: vec!["[invalid".to_string()],
        },
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn validate_accepts_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn loader_missing_explicit_path_is_error() {
    let loader = FileConfigLoader::new();
    let err = loader
        .load_from_path(Path::new("/nonexistent/.sloc-scan.toml"))
        .unwrap_err();
    assert!(matches!(err, SlocScanError::Config(_)));
}

#[test]
fn loader_reads_file_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "extensions = [\"go\"]\n").unwrap();

    let loader = FileConfigLoader::new();
    let config = loader.load_from_path(&path).unwrap();

    assert_eq!(config.extensions, vec!["go".to_string()]);
}

#[test]
fn loader_invalid_toml_is_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "extensions = not-a-list").unwrap();

    let loader = FileConfigLoader::new();
    let err = loader.load_from_path(&path).unwrap_err();
    assert!(matches!(err, SlocScanError::TomlParse(_)));
}

#[test]
fn loader_invalid_glob_in_file_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[exclude]\npatterns = [\"[bad\"]\n").unwrap();

    let loader = FileConfigLoader::new();
    let err = loader.load_from_path(&path).unwrap_err();
    assert!(matches!(err, SlocScanError::InvalidPattern { .. }));
}
