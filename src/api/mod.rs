// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backend API client.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
