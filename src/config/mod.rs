// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Configuration
//!
//! The settings the coffee shop client needs before it can reach its backend
//! or its identity provider. A configuration is assembled once at startup from
//! three layers, validated, and then only ever read:
//!
//! 1. the compiled-in preset for the selected [`Environment`]
//! 2. a JSON file (`environments/<env>.json` or `--config <FILE>`)
//! 3. the environment variables below
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `COFFEE_ENV` | Environment to select (`development`, `staging`, `production`) | `development` |
//! | `COFFEE_PRODUCTION` | Production build flag | From preset |
//! | `COFFEE_API_SERVER_URL` | Backend base URL | `http://127.0.0.1:5000` in development |
//! | `COFFEE_AUTH_DOMAIN` | Identity provider tenant (e.g. `dev-abc123`) | Required |
//! | `COFFEE_AUTH_AUDIENCE` | API identifier tokens must be issued for | `coffee` |
//! | `COFFEE_AUTH_CLIENT_ID` | Public client ID registered with the provider | Required |
//! | `COFFEE_AUTH_CALLBACK_URL` | Redirect target after login | `http://localhost:8100` in development |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` in production, `debug` otherwise |

mod environment;
mod loader;
mod raw;
mod settings;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use raw::{RawAuthSettings, RawEnvironmentConfig};
pub use settings::{AuthSettings, EnvironmentConfig};

/// Environment variable selecting the environment when `--env` is not given.
pub const ENVIRONMENT_ENV: &str = "COFFEE_ENV";

/// Overrides the `production` flag.
pub const PRODUCTION_ENV: &str = "COFFEE_PRODUCTION";

/// Overrides `apiServerUrl`.
pub const API_SERVER_URL_ENV: &str = "COFFEE_API_SERVER_URL";

/// Overrides `auth.domain`.
pub const AUTH_DOMAIN_ENV: &str = "COFFEE_AUTH_DOMAIN";

/// Overrides `auth.audience`.
pub const AUTH_AUDIENCE_ENV: &str = "COFFEE_AUTH_AUDIENCE";

/// Overrides `auth.clientId`.
pub const AUTH_CLIENT_ID_ENV: &str = "COFFEE_AUTH_CLIENT_ID";

/// Overrides `auth.callbackURL`.
pub const AUTH_CALLBACK_URL_ENV: &str = "COFFEE_AUTH_CALLBACK_URL";

/// Directory searched for `<env>.json` when no explicit file is given.
pub const DEFAULT_CONFIG_DIR: &str = "environments";

/// Suffix appended to bare tenant names (`dev-abc123` becomes
/// `dev-abc123.auth0.com`).
pub const TENANT_HOST_SUFFIX: &str = "auth0.com";

/// Prefix of the template values shipped in the development preset, matched
/// case-insensitively.
pub(crate) const PLACEHOLDER_PREFIX: &str = "YOUR-";

// Field paths as they appear in config files and error messages.
pub(crate) const FIELD_PRODUCTION: &str = "production";
pub(crate) const FIELD_API_SERVER_URL: &str = "apiServerUrl";
pub(crate) const FIELD_AUTH_DOMAIN: &str = "auth.domain";
pub(crate) const FIELD_AUTH_AUDIENCE: &str = "auth.audience";
pub(crate) const FIELD_AUTH_CLIENT_ID: &str = "auth.clientId";
pub(crate) const FIELD_AUTH_CALLBACK_URL: &str = "auth.callbackURL";
