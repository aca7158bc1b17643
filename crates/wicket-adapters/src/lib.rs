// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication strategies for the Wicket framework: the prioritized
//! adapter chain and a repository-backed credential-matching adapter.

use secrecy::{ExposeSecret, SecretString};

pub mod chain;
pub mod credential;
pub mod repository;
pub mod verifier;

pub use chain::{AdapterChain, DEFAULT_PRIORITY};
pub use credential::CredentialAdapter;
pub use repository::{IdentityRecord, IdentityRepository, InMemoryRepository};
pub use verifier::{Argon2Verifier, CredentialVerifier};

/// Duplicates a credential for an adapter deep copy. `SecretString` keeps
/// no blanket `Clone`, so the copy is rebuilt explicitly.
pub(crate) fn clone_credential(credential: Option<&SecretString>) -> Option<SecretString> {
    credential.map(|secret| SecretString::from(secret.expose_secret().to_string()))
}
