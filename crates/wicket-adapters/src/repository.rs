// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity lookup backends for the credential adapter.

use std::collections::BTreeMap;
use std::sync::Arc;

use wicket_core::{AuthError, IdentityRef};

/// One stored record: the principal plus its hashed credential.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub identity: IdentityRef,
    pub credential_hash: String,
}

/// Lookup backend for [`CredentialAdapter`](crate::CredentialAdapter).
///
/// `find` returns every record whose identity property matches the supplied
/// value; more than one match is how ambiguity reaches the adapter.
/// Backend failures surface as [`AuthError::Repository`].
pub trait IdentityRepository: Send + Sync {
    fn find(&self, identity: &str) -> Result<Vec<IdentityRecord>, AuthError>;
}

/// In-memory repository keyed by the identity property value.
///
/// Multiple records may share a key, which makes ambiguous-identity
/// behavior exercisable without a database.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    records: BTreeMap<String, Vec<IdentityRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under the given identity value.
    pub fn insert(
        &mut self,
        identity_value: impl Into<String>,
        identity: IdentityRef,
        credential_hash: impl Into<String>,
    ) -> &mut Self {
        self.records
            .entry(identity_value.into())
            .or_default()
            .push(IdentityRecord {
                identity,
                credential_hash: credential_hash.into(),
            });
        self
    }

    /// Wraps the repository for sharing with adapters.
    pub fn into_shared(self) -> Arc<dyn IdentityRepository> {
        Arc::new(self)
    }
}

impl IdentityRepository for InMemoryRepository {
    fn find(&self, identity: &str) -> Result<Vec<IdentityRecord>, AuthError> {
        Ok(self.records.get(identity).cloned().unwrap_or_default())
    }
}
