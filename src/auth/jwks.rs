// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWKS (JSON Web Key Set) fetching and caching.
//!
//! - Keys are fetched from the tenant's `/.well-known/jwks.json`
//! - Fetched sets are cached for a configurable TTL
//! - An expired cache is refetched on the next lookup

use std::sync::Arc;
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm};
use jsonwebtoken::{Algorithm, DecodingKey};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use super::error::AuthError;

/// Default JWKS cache TTL (5 minutes).
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    jwks: JwkSet,
    fetched_at: Instant,
}

/// Caching JWKS client for one tenant.
#[derive(Clone)]
pub struct JwksCache {
    jwks_url: Url,
    cache_ttl: Duration,
    cache: Arc<RwLock<Option<CacheEntry>>>,
    http: reqwest::Client,
}

impl JwksCache {
    pub fn new(jwks_url: Url, http: reqwest::Client) -> Self {
        Self {
            jwks_url,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache: Arc::new(RwLock::new(None)),
            http,
        }
    }

    /// Create with custom cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn jwks_url(&self) -> &Url {
        &self.jwks_url
    }

    /// Check if a key set is cached and still fresh.
    pub async fn is_cached(&self) -> bool {
        let cache = self.cache.read().await;
        (*cache)
            .as_ref()
            .is_some_and(|entry| entry.fetched_at.elapsed() < self.cache_ttl)
    }

    /// Replace the cached key set.
    pub async fn store(&self, jwks: JwkSet) {
        let mut cache = self.cache.write().await;
        *cache = Some(CacheEntry {
            jwks,
            fetched_at: Instant::now(),
        });
    }

    /// Force refresh the cache from the tenant.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let jwks = self.fetch().await?;
        self.store(jwks).await;
        Ok(())
    }

    /// Find the verification key for a token.
    ///
    /// With a `kid` the matching key is required. Without one, the first
    /// usable key in the set is returned.
    pub async fn decoding_key(
        &self,
        kid: Option<&str>,
    ) -> Result<(DecodingKey, Algorithm), AuthError> {
        let jwks = self.key_set().await?;

        match kid {
            Some(kid) => {
                let jwk = jwks
                    .keys
                    .iter()
                    .find(|k| k.common.key_id.as_deref() == Some(kid))
                    .ok_or(AuthError::NoMatchingKey)?;
                jwk_to_decoding_key(jwk)
            }
            None => jwks
                .keys
                .iter()
                .find_map(|jwk| jwk_to_decoding_key(jwk).ok())
                .ok_or(AuthError::NoMatchingKey),
        }
    }

    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(entry) = &*cache {
                if entry.fetched_at.elapsed() < self.cache_ttl {
                    return Ok(entry.jwks.clone());
                }
            }
        }

        let jwks = self.fetch().await?;
        self.store(jwks.clone()).await;
        Ok(jwks)
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        debug!(url = %self.jwks_url, "Fetching JWKS");

        let response = self
            .http
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|e| AuthError::JwksFetchError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::JwksFetchError(format!(
                "HTTP {} from JWKS endpoint",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::JwksFetchError(e.to_string()))
    }
}

fn jwk_to_decoding_key(jwk: &Jwk) -> Result<(DecodingKey, Algorithm), AuthError> {
    match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => {
            let key = DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
                .map_err(|e| AuthError::UnsupportedKey(format!("RSA key: {e}")))?;

            let alg = match jwk.common.key_algorithm {
                Some(KeyAlgorithm::RS384) => Algorithm::RS384,
                Some(KeyAlgorithm::RS512) => Algorithm::RS512,
                _ => Algorithm::RS256,
            };
            Ok((key, alg))
        }
        AlgorithmParameters::EllipticCurve(ec) => {
            let key = DecodingKey::from_ec_components(&ec.x, &ec.y)
                .map_err(|e| AuthError::UnsupportedKey(format!("EC key: {e}")))?;

            let alg = match jwk.common.key_algorithm {
                Some(KeyAlgorithm::ES384) => Algorithm::ES384,
                _ => Algorithm::ES256,
            };
            Ok((key, alg))
        }
        _ => Err(AuthError::UnsupportedKey("unsupported key type".to_string())),
    }
}
