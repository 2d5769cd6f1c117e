// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::auth::{AuthError, IdentityClient};
use crate::config::EnvironmentConfig;
use crate::HTTP_TIMEOUT;

/// Everything built from one validated configuration.
///
/// Created once in `main` and passed to whatever needs it; the configuration
/// inside is shared, never copied or edited.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<EnvironmentConfig>,
    pub identity: IdentityClient,
    pub api: ApiClient,
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppContext {
    pub fn new(config: EnvironmentConfig) -> Result<Self, ContextError> {
        let config = Arc::new(config);
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            identity: IdentityClient::with_http_client(&config, http.clone())?,
            api: ApiClient::with_http_client(&config, http),
            config,
        })
    }
}
