// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The authenticated principal and its optional capabilities.
//!
//! An identity is opaque to the pipeline: the core never looks inside it
//! beyond the two capability queries below. Capabilities are explicit
//! optional interfaces rather than reflection probes; an identity that does
//! not expose a capability simply renders the corresponding listener inert.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The authenticated principal (e.g. a user record).
///
/// Identities move through the pipeline as `Arc<dyn Identity>` and are
/// persisted as-is by the [`Storage`](crate::Storage) collaborator.
pub trait Identity: fmt::Debug + Send + Sync {
    /// Recovers the concrete type, e.g. after reading back from storage.
    fn as_any(&self) -> &dyn Any;

    /// Capability query for ban status. `None` means the identity carries
    /// no ban concept and ban checks do not apply to it.
    fn as_bannable(&self) -> Option<&dyn Bannable> {
        None
    }

    /// Capability query for verification status. `None` means the identity
    /// carries no verification concept.
    fn as_verifiable(&self) -> Option<&dyn Verifiable> {
        None
    }
}

/// Optional capability: the identity can be banned.
pub trait Bannable {
    fn is_banned(&self) -> bool;
}

/// Optional capability: the identity goes through account verification.
pub trait Verifiable {
    fn is_verified(&self) -> bool;
}

/// Shared handle to an identity as carried by results, events, and storage.
pub type IdentityRef = Arc<dyn Identity>;
