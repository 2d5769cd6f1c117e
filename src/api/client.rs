// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP client for the coffee shop backend.
//!
//! All requests are relative to `apiServerUrl`. A base with a path prefix
//! (`https://api.example/coffee`) keeps that prefix for every endpoint.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::ApiError;
use crate::config::EnvironmentConfig;
use crate::models::{Drink, DrinksResponse};
use crate::HTTP_TIMEOUT;

/// Client bound to the backend named in the configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &EnvironmentConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: &EnvironmentConfig, http: Client) -> Self {
        let mut base_url = config.api_server_url().clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    ///
    /// Absolute URLs and scheme-relative paths are rejected so a request can
    /// never leave the configured origin.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidPath(path.to_string());

        if path.starts_with("//") || path.contains("://") {
            return Err(invalid());
        }

        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| invalid())?;

        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(invalid());
        }
        Ok(url)
    }

    /// `GET /drinks` (public, short form).
    pub async fn get_drinks(&self) -> Result<Vec<Drink>, ApiError> {
        self.fetch_drinks("drinks", None).await
    }

    /// `GET /drinks-detail` (long form, needs a bearer token).
    pub async fn get_drinks_detail(&self, access_token: &str) -> Result<Vec<Drink>, ApiError> {
        self.fetch_drinks("drinks-detail", Some(access_token)).await
    }

    async fn fetch_drinks(
        &self,
        path: &str,
        access_token: Option<&str>,
    ) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, authenticated = access_token.is_some(), "GET");

        let mut request = self.http.get(url);
        if let Some(token) = access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        let body: DrinksResponse = response.json().await?;
        if !body.success {
            return Err(ApiError::Unsuccessful);
        }
        Ok(body.drinks)
    }
}
