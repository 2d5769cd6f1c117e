// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token claims and the authenticated user derived from them.

use serde::{Deserialize, Serialize};

use super::AuthError;

/// The `aud` claim: providers send either a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::One(a) => a == audience,
            Audience::Many(list) => list.iter().any(|a| a == audience),
        }
    }
}

/// Claims carried by an access token issued for the coffee shop API.
///
/// Only `sub`, `exp` and `iss` are required; `permissions` is populated when
/// RBAC is enabled for the API on the provider side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Expiration timestamp
    pub exp: u64,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,

    /// Issuer (tenant URL with trailing slash)
    pub iss: String,

    /// Audience (validated by jsonwebtoken, read for diagnostics)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,

    /// Authorized party (the client ID the token was issued to)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,

    /// Space separated OAuth scopes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// API permissions, e.g. `get:drinks-detail`
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Authenticated user information extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Provider user ID (`sub` claim)
    pub user_id: String,

    /// Granted API permissions
    pub permissions: Vec<String>,

    /// Client the token was issued to, when the provider says so
    pub authorized_party: Option<String>,

    /// Issuer the token was validated against
    pub issuer: String,

    /// Token expiration (Unix timestamp)
    pub expires_at: u64,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: AccessTokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            permissions: claims.permissions,
            authorized_party: claims.azp,
            issuer: claims.iss,
            expires_at: claims.exp,
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Like [`has_permission`](Self::has_permission) but as an error.
    pub fn require_permission(&self, permission: &str) -> Result<(), AuthError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(AuthError::MissingPermission(permission.to_string()))
        }
    }
}
