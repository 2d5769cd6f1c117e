// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Layered configuration loading.

use std::path::PathBuf;

use figment::{
    providers::{Format, Json, Serialized},
    Figment,
};
use tracing::{debug, info};

use super::environment::Environment;
use super::raw::RawEnvironmentConfig;
use super::settings::EnvironmentConfig;
use super::DEFAULT_CONFIG_DIR;
use crate::error::ConfigError;

/// Builds an [`EnvironmentConfig`] for one selected environment.
///
/// Layers, lowest precedence first: the environment preset, the JSON file,
/// then `COFFEE_*` variables.
///
/// ```rust,ignore
/// let config = ConfigLoader::new(Environment::Staging)
///     .with_config_file("deploy/staging.json")
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    environment: Environment,
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
        }
    }

    /// Directory searched for `<env>.json`. Ignored when an explicit file is set.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Use this file instead of `<config_dir>/<env>.json`. It must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The file that will be merged, if any.
    ///
    /// A missing default file just means no file layer; a missing explicit
    /// file is an error.
    pub fn resolved_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        match &self.config_file {
            Some(path) if path.is_file() => Ok(Some(path.clone())),
            Some(path) => Err(ConfigError::FileNotFound { path: path.clone() }),
            None => {
                let path = self.config_dir.join(self.environment.file_name());
                Ok(path.is_file().then_some(path))
            }
        }
    }

    /// Load using the process environment for overrides.
    pub fn load(&self) -> Result<EnvironmentConfig, ConfigError> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for the `COFFEE_*` overrides.
    pub fn load_with<F>(&self, lookup: F) -> Result<EnvironmentConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.extract_raw(lookup)?.validate()
    }

    /// Merge all layers without validating.
    pub fn extract_raw<F>(&self, lookup: F) -> Result<RawEnvironmentConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut figment = Figment::from(Serialized::defaults(self.environment.preset()));

        if let Some(path) = self.resolved_file()? {
            info!(
                environment = %self.environment,
                path = %path.display(),
                "Merging configuration file"
            );
            figment = figment.merge(Json::file(&path));
        } else {
            debug!(environment = %self.environment, "No configuration file, using preset");
        }

        let overrides = RawEnvironmentConfig::from_lookup(lookup)?;
        if overrides != RawEnvironmentConfig::default() {
            info!(environment = %self.environment, "Applying COFFEE_* overrides");
        }
        figment = figment.merge(Serialized::defaults(overrides));

        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    const DEV_FILE: &str = r#"{
        "auth": {
            "domain": "dev-abc123",
            "clientId": "abc123XYZ"
        }
    }"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn dir_with(name: &str, contents: &str) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join(name), contents).expect("Failed to write config");
        dir
    }

    #[test]
    fn file_fills_in_preset_placeholders() {
        let dir = dir_with("development.json", DEV_FILE);
        let config = ConfigLoader::new(Environment::Development)
            .with_config_dir(dir.path())
            .load_with(no_env)
            .unwrap();

        assert!(!config.production());
        assert_eq!(config.api_server_url().as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.auth().domain(), "dev-abc123");
        assert_eq!(config.auth().audience(), "coffee");
        assert_eq!(config.auth().client_id(), "abc123XYZ");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn selected_sources_are_logged_at_info() {
        let dir = dir_with("development.json", DEV_FILE);
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ConfigLoader::new(Environment::Development)
                .with_config_dir(dir.path())
                .load_with(|k| (k == "COFFEE_AUTH_AUDIENCE").then(|| "coffee".to_string()))
                .unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Merging configuration file"), "{output}");
        assert!(output.contains("development.json"), "{output}");
        assert!(output.contains("Applying COFFEE_* overrides"), "{output}");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = dir_with("development.json", DEV_FILE);
        let vars = HashMap::from([
            ("COFFEE_API_SERVER_URL", "http://127.0.0.1:8080"),
            ("COFFEE_AUTH_CLIENT_ID", "fromEnv"),
        ]);
        let config = ConfigLoader::new(Environment::Development)
            .with_config_dir(dir.path())
            .load_with(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_server_url().port(), Some(8080));
        assert_eq!(config.auth().client_id(), "fromEnv");
        assert_eq!(config.auth().domain(), "dev-abc123");
    }

    #[test]
    fn empty_override_fails_validation() {
        let dir = dir_with("development.json", DEV_FILE);
        let err = ConfigLoader::new(Environment::Development)
            .with_config_dir(dir.path())
            .load_with(|k| (k == "COFFEE_AUTH_DOMAIN").then(String::new))
            .unwrap_err();

        assert_eq!(err.field(), Some("auth.domain"));
        assert_eq!(err.reason(), Some(&InvalidReason::Empty));
    }

    #[test]
    fn missing_default_file_leaves_preset() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(Environment::Development).with_config_dir(dir.path());
        assert_eq!(loader.resolved_file().unwrap(), None);

        let err = loader.load_with(no_env).unwrap_err();
        assert_eq!(err.field(), Some("auth.domain"));
        assert_eq!(err.reason(), Some(&InvalidReason::Placeholder));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        let err = ConfigLoader::new(Environment::Staging)
            .with_config_file(&path)
            .load_with(no_env)
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn malformed_file_is_a_source_error() {
        let dir = dir_with("staging.json", "{ not json");
        let err = ConfigLoader::new(Environment::Staging)
            .with_config_dir(dir.path())
            .load_with(no_env)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Source(_)));
    }

    #[test]
    fn production_file_is_selected_by_environment() {
        let dir = dir_with(
            "production.json",
            r#"{
                "apiServerUrl": "https://api.coffee.example",
                "auth": {
                    "domain": "coffee-prod",
                    "clientId": "prodClient",
                    "callbackURL": "https://coffee.example"
                }
            }"#,
        );
        fs::write(dir.path().join("development.json"), DEV_FILE).unwrap();

        let config = ConfigLoader::new(Environment::Production)
            .with_config_dir(dir.path())
            .load_with(no_env)
            .unwrap();

        assert!(config.production());
        assert_eq!(config.auth().domain(), "coffee-prod");
        assert_eq!(config.api_server_url().scheme(), "https");
    }

    #[test]
    fn loading_twice_yields_equal_values() {
        let dir = dir_with("development.json", DEV_FILE);
        let loader = ConfigLoader::new(Environment::Development).with_config_dir(dir.path());
        assert_eq!(loader.load_with(no_env).unwrap(), loader.load_with(no_env).unwrap());
    }
}
