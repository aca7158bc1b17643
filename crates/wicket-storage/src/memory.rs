// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process identity storage with remember-me TTL semantics.

use std::time::{Duration, Instant};

use tracing::debug;

use wicket_core::{AuthError, IdentityRef, Storage, REMEMBER_ME_SECONDS};

/// Session-like identity store held in process memory.
///
/// Without a TTL the identity sticks until cleared. `remember_me` arms a
/// TTL applied to subsequent writes; an entry past its deadline reads as
/// empty and is dropped on the next access, so callers never observe an
/// expired identity.
pub struct MemoryStorage {
    entry: Option<StoredIdentity>,
    ttl: Option<Duration>,
}

struct StoredIdentity {
    identity: IdentityRef,
    deadline: Option<Instant>,
}

impl MemoryStorage {
    /// Storage with no expiry.
    pub fn new() -> Self {
        Self {
            entry: None,
            ttl: None,
        }
    }

    /// Storage whose writes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entry: None,
            ttl: Some(ttl),
        }
    }

    /// Arms the remember-me TTL for subsequent writes. `None` uses the
    /// default of two weeks.
    pub fn remember_me(&mut self, ttl: Option<Duration>) -> &mut Self {
        self.ttl = Some(ttl.unwrap_or(Duration::from_secs(REMEMBER_ME_SECONDS)));
        self
    }

    /// Disarms the TTL: subsequent writes stick until cleared.
    pub fn forget_me(&mut self) -> &mut Self {
        self.ttl = None;
        self
    }

    fn drop_if_expired(&mut self) {
        let expired = self
            .entry
            .as_ref()
            .and_then(|stored| stored.deadline)
            .is_some_and(|deadline| Instant::now() >= deadline);
        if expired {
            debug!("stored identity expired, clearing");
            self.entry = None;
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn is_empty(&mut self) -> Result<bool, AuthError> {
        self.drop_if_expired();
        Ok(self.entry.is_none())
    }

    fn read(&mut self) -> Result<Option<IdentityRef>, AuthError> {
        self.drop_if_expired();
        Ok(self
            .entry
            .as_ref()
            .map(|stored| IdentityRef::clone(&stored.identity)))
    }

    fn write(&mut self, identity: IdentityRef) -> Result<(), AuthError> {
        let deadline = self.ttl.map(|ttl| Instant::now() + ttl);
        debug!(has_deadline = deadline.is_some(), "persisting identity");
        self.entry = Some(StoredIdentity { identity, deadline });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AuthError> {
        self.entry = None;
        Ok(())
    }
}
