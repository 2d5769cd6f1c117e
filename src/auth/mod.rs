// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Client side of the identity provider integration.
//!
//! ## Auth Flow
//!
//! 1. [`IdentityClient::authorize_url`] sends the user to the tenant's
//!    `/authorize` endpoint with the configured audience, client ID and
//!    callback URL
//! 2. The provider redirects back to the callback URL with the access token
//!    in the fragment; [`IdentityClient::parse_callback`] extracts it
//! 3. [`IdentityClient::verify`] checks the token against the tenant JWKS:
//!    signature, expiry, issuer, audience
//! 4. The token is attached as `Authorization: Bearer <token>` by the API
//!    client
//!
//! ## Security
//!
//! - JWKS is fetched via HTTPS only
//! - JWKS is cached with TTL
//! - Clock skew tolerance is 60 seconds
//! - Tokens are never logged

pub mod callback;
pub mod claims;
pub mod client;
pub mod error;
pub mod jwks;

pub use callback::CallbackToken;
pub use claims::{AccessTokenClaims, Audience, AuthenticatedUser};
pub use client::IdentityClient;
pub use error::AuthError;
pub use jwks::JwksCache;
