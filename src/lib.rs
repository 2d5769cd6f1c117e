// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Env - Environment Configuration for the Coffee Shop Client
//!
//! Loads the per-environment settings once at startup, validates them, and
//! hands the immutable result to the clients that need it.
//!
//! ## Modules
//!
//! - `config` - Environment selection, layered loading, validation
//! - `auth` - Identity provider client (login links, callback, token checks)
//! - `api` - Backend API client
//! - `state` - Clients built from one configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;

use std::time::Duration;

/// Timeout applied to every outbound HTTP request.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub use config::{ConfigLoader, Environment, EnvironmentConfig};
pub use error::{ConfigError, InvalidReason};
pub use state::AppContext;
