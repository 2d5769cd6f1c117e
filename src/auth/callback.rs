// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Parsing the redirect that ends an implicit-flow login.
//!
//! The provider sends the user-agent back to the callback URL with the
//! result in the fragment:
//!
//! ```text
//! http://localhost:8100/#access_token=eyJ...&token_type=Bearer&expires_in=7200&state=xyz
//! ```
//!
//! Failures arrive the same way as `error` / `error_description`.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use url::Url;

use super::AuthError;

/// Token material recovered from a successful redirect.
#[derive(Clone, PartialEq, Eq)]
pub struct CallbackToken {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<Duration>,
    pub state: Option<String>,
}

// Keep tokens out of logs.
impl fmt::Debug for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("state", &self.state)
            .finish()
    }
}

/// Extract the token from `redirect`, which must share the origin of
/// `callback_url`.
pub fn parse_callback(callback_url: &Url, redirect: &Url) -> Result<CallbackToken, AuthError> {
    if redirect.origin() != callback_url.origin() {
        return Err(AuthError::CallbackMismatch);
    }

    // Tokens only ever arrive in the fragment. Errors may also come back in
    // the query, e.g. for a rejected authorize request.
    let mut params: HashMap<String, String> = redirect
        .query_pairs()
        .filter(|(k, _)| k == "error" || k == "error_description")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some(fragment) = redirect.fragment() {
        params.extend(url::form_urlencoded::parse(fragment.as_bytes()).into_owned());
    }

    if let Some(error) = params.remove("error") {
        return Err(AuthError::ProviderError {
            error,
            description: params.remove("error_description"),
        });
    }

    let access_token = params
        .remove("access_token")
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingAccessToken)?;

    Ok(CallbackToken {
        access_token,
        token_type: params.remove("token_type"),
        expires_in: params
            .get("expires_in")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs),
        state: params.remove("state"),
    })
}
