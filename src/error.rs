// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Configuration errors.
//!
//! Every way startup configuration can go wrong is a [`ConfigError`]. None of
//! them are recoverable at runtime: the process logs the error and exits, and
//! a human fixes the file or environment before restarting.

use std::path::PathBuf;

/// Why a single configuration field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    /// The field was not provided by any layer.
    #[error("value is missing")]
    Missing,
    /// The field was provided but is empty after trimming.
    #[error("value is empty")]
    Empty,
    /// The field still holds a `YOUR-...` template value.
    #[error("value is still a placeholder and must be replaced")]
    Placeholder,
    /// The value could not be parsed as a URL.
    #[error("not a valid URL: {0}")]
    InvalidUrl(String),
    /// The URL parsed but cannot serve as a base (e.g. `mailto:`).
    #[error("not an absolute URL")]
    NotAbsoluteUrl,
    /// Production builds must not use plain HTTP outside loopback.
    #[error("production builds require https for non-loopback hosts")]
    InsecureScheme,
    /// The value is not a recognised boolean.
    #[error("expected true or false, got '{0}'")]
    InvalidBool(String),
    /// The tenant is neither a bare tenant name nor a plain host name.
    #[error("not a tenant name or host (no path, port or credentials allowed)")]
    InvalidTenant,
}

/// Startup configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent, empty, or malformed.
    #[error("missing or invalid configuration for '{field}': {reason}")]
    MissingOrInvalid {
        field: &'static str,
        reason: InvalidReason,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A configuration source could not be read or merged.
    #[error("failed to read configuration: {0}")]
    Source(String),

    /// The environment name is not one of the known environments.
    #[error("unknown environment '{0}' (expected development, staging or production)")]
    UnknownEnvironment(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: InvalidReason) -> Self {
        ConfigError::MissingOrInvalid { field, reason }
    }

    /// The offending field, for `MissingOrInvalid` errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingOrInvalid { field, .. } => Some(field),
            _ => None,
        }
    }

    /// The rejection reason, for `MissingOrInvalid` errors.
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            ConfigError::MissingOrInvalid { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Source(e.to_string())
    }
}
