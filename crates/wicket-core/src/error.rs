// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Wicket authentication library.
//!
//! Only misuse and misconfiguration are errors here. Domain outcomes
//! (identity not found, bad credential, banned account, ...) are expected
//! results of an authentication attempt and travel as non-valid
//! [`AuthResult`](crate::AuthResult) values, never as `AuthError`.

use thiserror::Error;

/// The primary error type used across all Wicket traits and operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An option was given an unusable value (empty property name,
    /// out-of-range cost).
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The adapter or service was not set up properly before use: missing
    /// adapter, empty chain, or identity/credential not supplied. Raised
    /// before any side effect takes place.
    #[error("setup error: {0}")]
    Setup(String),

    /// The listener pipeline finished without producing a usable result.
    /// Signals a misconfigured listener chain; fatal to the current call.
    #[error("authentication stopped without a usable result: {0}")]
    Stopped(String),

    /// Identity storage errors (session transport, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Identity repository errors (lookup backend failure).
    #[error("repository error: {source}")]
    Repository {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Credential hashing or verification machinery failed (malformed
    /// stored hash, bad parameters). Distinct from a credential mismatch,
    /// which is a domain outcome.
    #[error("credential hashing error: {0}")]
    Crypt(String),
}
