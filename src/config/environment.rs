// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Named deployment environments and their compiled-in presets.

use std::str::FromStr;

use super::raw::{RawAuthSettings, RawEnvironmentConfig};
use crate::error::ConfigError;

/// Audience the coffee shop API is registered under.
const DEFAULT_AUDIENCE: &str = "coffee";

/// A deployment environment.
///
/// Selecting an environment picks a preset and a default config file name.
/// It never changes an already loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local backend on loopback, local callback.
    #[default]
    Development,
    /// Shared pre-production deployment.
    Staging,
    /// Live deployment.
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Whether builds for this environment are production builds by default.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// File name looked up in the config directory, e.g. `staging.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Compiled-in starting values for this environment.
    ///
    /// The development preset mirrors the local setup (Flask backend on
    /// `127.0.0.1:5000`, client on `localhost:8100`) but ships template
    /// tenant and client values, so it only validates once those are
    /// overridden. Staging and production presets carry only the flag and the
    /// audience; everything else must come from a file or the environment.
    pub fn preset(&self) -> RawEnvironmentConfig {
        match self {
            Environment::Development => RawEnvironmentConfig {
                production: Some(false),
                api_server_url: Some("http://127.0.0.1:5000".to_string()),
                auth: RawAuthSettings {
                    domain: Some("YOUR-TENANT-NAME".to_string()),
                    audience: Some(DEFAULT_AUDIENCE.to_string()),
                    client_id: Some("YOUR-CLIENT-ID".to_string()),
                    callback_url: Some("http://localhost:8100".to_string()),
                },
            },
            Environment::Staging | Environment::Production => RawEnvironmentConfig {
                production: Some(self.is_production()),
                api_server_url: None,
                auth: RawAuthSettings {
                    audience: Some(DEFAULT_AUDIENCE.to_string()),
                    ..Default::default()
                },
            },
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Parse an environment name (case-insensitive, common short forms allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
