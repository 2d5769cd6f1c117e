// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backend API client errors.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path would leave the configured API origin or is not a valid URL.
    #[error("Invalid API path '{0}'")]
    InvalidPath(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Transport or body decoding failure.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401 or 403 from a protected endpoint.
    #[error("API rejected the request credentials (HTTP {0})")]
    Unauthorized(StatusCode),

    #[error("API returned HTTP {0}")]
    Status(StatusCode),

    /// HTTP 200 with `"success": false`.
    #[error("API reported an unsuccessful response")]
    Unsuccessful,
}

impl ApiError {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Unauthorized(status)
        } else {
            ApiError::Status(status)
        }
    }
}
