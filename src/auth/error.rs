// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity provider client errors.

/// Authentication error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The configured tenant cannot be turned into a provider host.
    #[error("Invalid identity provider tenant '{0}'")]
    InvalidTenant(String),
    /// Token is malformed
    #[error("Token is malformed")]
    MalformedToken,
    /// Token signature is invalid
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
    /// Token issuer is invalid
    #[error("Token issuer is invalid")]
    InvalidIssuer,
    /// Token audience is invalid
    #[error("Token audience is invalid")]
    InvalidAudience,
    /// Token is not yet valid
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    /// JWKS fetch failed
    #[error("Failed to fetch JWKS: {0}")]
    JwksFetchError(String),
    /// No matching key in JWKS
    #[error("No matching key found in JWKS")]
    NoMatchingKey,
    /// Key present in JWKS but not usable for verification
    #[error("Unsupported key in JWKS: {0}")]
    UnsupportedKey(String),
    /// Redirect did not land on the configured callback
    #[error("Redirect URL does not match the configured callback URL")]
    CallbackMismatch,
    /// Redirect carried no access token
    #[error("Redirect URL does not contain an access token")]
    MissingAccessToken,
    /// The provider redirected back with an error
    #[error("Identity provider returned '{error}': {}", .description.as_deref().unwrap_or("no description"))]
    ProviderError {
        error: String,
        description: Option<String>,
    },
    /// Token is valid but lacks a required permission
    #[error("Token is missing permission '{0}'")]
    MissingPermission(String),
    /// Internal error
    #[error("Internal authentication error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidTenant(_) => "invalid_tenant",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::InvalidAudience => "invalid_audience",
            AuthError::TokenNotYetValid => "token_not_yet_valid",
            AuthError::JwksFetchError(_) => "jwks_fetch_error",
            AuthError::NoMatchingKey => "no_matching_key",
            AuthError::UnsupportedKey(_) => "unsupported_key",
            AuthError::CallbackMismatch => "callback_mismatch",
            AuthError::MissingAccessToken => "missing_access_token",
            AuthError::ProviderError { .. } => "provider_error",
            AuthError::MissingPermission(_) => "missing_permission",
            AuthError::InternalError(_) => "internal_error",
        }
    }

    /// Whether signing in again could fix this error.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken
                | AuthError::InvalidSignature
                | AuthError::TokenExpired
                | AuthError::InvalidIssuer
                | AuthError::InvalidAudience
                | AuthError::TokenNotYetValid
                | AuthError::MissingAccessToken
                | AuthError::ProviderError { .. }
        )
    }
}
