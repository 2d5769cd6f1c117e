// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unvalidated configuration as it arrives from presets, files, and the
//! environment.
//!
//! Every field is optional so that a missing value can be reported by name
//! instead of as a generic deserialization failure. Nothing outside this
//! crate's loader should hold on to a raw config; call
//! [`RawEnvironmentConfig::validate`] and pass the result around instead.

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use super::settings::{AuthSettings, ConfiguredUrl, EnvironmentConfig};
use super::{
    API_SERVER_URL_ENV, AUTH_AUDIENCE_ENV, AUTH_CALLBACK_URL_ENV, AUTH_CLIENT_ID_ENV,
    AUTH_DOMAIN_ENV, FIELD_API_SERVER_URL, FIELD_AUTH_AUDIENCE, FIELD_AUTH_CALLBACK_URL,
    FIELD_AUTH_CLIENT_ID, FIELD_AUTH_DOMAIN, FIELD_PRODUCTION, PLACEHOLDER_PREFIX,
    PRODUCTION_ENV, TENANT_HOST_SUFFIX,
};
use crate::error::{ConfigError, InvalidReason};

/// Raw environment configuration (camelCase on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_server_url: Option<String>,

    #[serde(default)]
    pub auth: RawAuthSettings,
}

/// Raw identity provider settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(
        default,
        rename = "callbackURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub callback_url: Option<String>,
}

impl RawEnvironmentConfig {
    /// Collect overrides from `COFFEE_*` variables via `lookup`.
    ///
    /// Unset variables leave the field `None` so the override layer only
    /// replaces what was actually provided.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup(PRODUCTION_ENV)
            .map(|v| parse_bool(FIELD_PRODUCTION, &v))
            .transpose()?;

        Ok(Self {
            production,
            api_server_url: lookup(API_SERVER_URL_ENV),
            auth: RawAuthSettings {
                domain: lookup(AUTH_DOMAIN_ENV),
                audience: lookup(AUTH_AUDIENCE_ENV),
                client_id: lookup(AUTH_CLIENT_ID_ENV),
                callback_url: lookup(AUTH_CALLBACK_URL_ENV),
            },
        })
    }

    /// Check every field and produce the immutable configuration.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    pub fn validate(self) -> Result<EnvironmentConfig, ConfigError> {
        let production = self
            .production
            .ok_or_else(|| ConfigError::invalid(FIELD_PRODUCTION, InvalidReason::Missing))?;

        let api_server_url = required_url(FIELD_API_SERVER_URL, self.api_server_url, production)?;
        let domain = required_text(FIELD_AUTH_DOMAIN, self.auth.domain)?;
        let tenant_host = resolve_tenant_host(FIELD_AUTH_DOMAIN, &domain)?;
        let audience = required_text(FIELD_AUTH_AUDIENCE, self.auth.audience)?;
        let client_id = required_text(FIELD_AUTH_CLIENT_ID, self.auth.client_id)?;
        let callback_url =
            required_url(FIELD_AUTH_CALLBACK_URL, self.auth.callback_url, production)?;

        Ok(EnvironmentConfig::new(
            production,
            api_server_url,
            AuthSettings::new(domain, tenant_host, audience, client_id, callback_url),
        ))
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::invalid(field, InvalidReason::Missing))?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::invalid(field, InvalidReason::Empty));
    }
    if trimmed
        .get(..PLACEHOLDER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PLACEHOLDER_PREFIX))
    {
        return Err(ConfigError::invalid(field, InvalidReason::Placeholder));
    }

    Ok(trimmed.to_string())
}

/// A URL field, kept both as written (trimmed) and parsed.
fn required_url(
    field: &'static str,
    value: Option<String>,
    production: bool,
) -> Result<ConfiguredUrl, ConfigError> {
    let text = required_text(field, value)?;
    let url = Url::parse(&text)
        .map_err(|e| ConfigError::invalid(field, InvalidReason::InvalidUrl(e.to_string())))?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(ConfigError::invalid(field, InvalidReason::NotAbsoluteUrl));
    }
    if production && url.scheme() != "https" && !is_loopback(&url) {
        return Err(ConfigError::invalid(field, InvalidReason::InsecureScheme));
    }

    Ok(ConfiguredUrl::new(text, url))
}

/// Resolve the tenant to the provider host.
///
/// A bare name (`dev-abc123`) gets the provider suffix; anything containing a
/// dot is taken as the full host. A pasted `https://` prefix or trailing slash
/// is tolerated, but paths, ports and credentials are not.
fn resolve_tenant_host(field: &'static str, domain: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::invalid(field, InvalidReason::InvalidTenant);

    let bare = domain.trim_start_matches("https://").trim_end_matches('/');
    if bare.is_empty()
        || bare.contains(['/', '@', ':', '?', '#'])
        || bare.contains(char::is_whitespace)
    {
        return Err(invalid());
    }

    let host = if bare.contains('.') {
        bare.to_ascii_lowercase()
    } else {
        format!("{}.{TENANT_HOST_SUFFIX}", bare.to_ascii_lowercase())
    };

    match Url::parse(&format!("https://{host}/")) {
        Ok(url) if url.host_str() == Some(host.as_str()) => Ok(host),
        _ => Err(invalid()),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(name)) => name.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(
            field,
            InvalidReason::InvalidBool(value.to_string()),
        )),
    }
}
