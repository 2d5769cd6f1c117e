// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Validated, read-only configuration.

use url::Url;

use super::raw::{RawAuthSettings, RawEnvironmentConfig};

/// A URL as it was written (trimmed) together with its parsed form.
///
/// Parsing normalizes (`http://localhost:8100` gains a trailing `/`), so the
/// written text is what gets printed and sent as a redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfiguredUrl {
    text: String,
    url: Url,
}

impl ConfiguredUrl {
    pub(crate) fn new(text: String, url: Url) -> Self {
        Self { text, url }
    }
}

/// Fully validated environment configuration.
///
/// Only obtainable through [`RawEnvironmentConfig::validate`], so holding one
/// means every field is present and well-formed. There are no setters; to
/// change environments, load another instance. Share it as
/// `Arc<EnvironmentConfig>` when several components need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: ConfiguredUrl,
    auth: AuthSettings,
}

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    domain: String,
    tenant_host: String,
    audience: String,
    client_id: String,
    callback_url: ConfiguredUrl,
}

impl EnvironmentConfig {
    pub(crate) fn new(
        production: bool,
        api_server_url: ConfiguredUrl,
        auth: AuthSettings,
    ) -> Self {
        Self {
            production,
            api_server_url,
            auth,
        }
    }

    /// Whether this is a production build.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Base address of the backend service.
    pub fn api_server_url(&self) -> &Url {
        &self.api_server_url.url
    }

    /// `apiServerUrl` exactly as configured.
    pub fn api_server_url_str(&self) -> &str {
        &self.api_server_url.text
    }

    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }

    /// Convert back to the wire shape, e.g. for printing the resolved config.
    pub fn to_raw(&self) -> RawEnvironmentConfig {
        RawEnvironmentConfig {
            production: Some(self.production),
            api_server_url: Some(self.api_server_url.text.clone()),
            auth: RawAuthSettings {
                domain: Some(self.auth.domain.clone()),
                audience: Some(self.auth.audience.clone()),
                client_id: Some(self.auth.client_id.clone()),
                callback_url: Some(self.auth.callback_url.text.clone()),
            },
        }
    }
}

impl AuthSettings {
    pub(crate) fn new(
        domain: String,
        tenant_host: String,
        audience: String,
        client_id: String,
        callback_url: ConfiguredUrl,
    ) -> Self {
        Self {
            domain,
            tenant_host,
            audience,
            client_id,
            callback_url,
        }
    }

    /// Identity provider tenant, either a bare name (`dev-abc123`) or a full
    /// host (`login.example.com`).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Provider host the tenant resolves to, e.g. `dev-abc123.auth0.com`.
    pub fn tenant_host(&self) -> &str {
        &self.tenant_host
    }

    /// API identifier that issued tokens must carry in `aud`.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Where the identity provider sends the user back after login.
    pub fn callback_url(&self) -> &Url {
        &self.callback_url.url
    }

    /// `callbackURL` exactly as configured, as registered with the provider.
    pub fn callback_url_str(&self) -> &str {
        &self.callback_url.text
    }
}
