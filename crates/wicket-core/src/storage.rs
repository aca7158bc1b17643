// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The identity persistence contract.

use crate::error::AuthError;
use crate::identity::IdentityRef;

/// Process-external persistence of the current identity (session-like).
///
/// The pipeline needs only these four operations. Implementations may add
/// TTL / remember-me extensions on top; expiry must surface through
/// [`is_empty`](Storage::is_empty) so an expired identity reads as absent.
/// Access is assumed atomic at the granularity of a single call.
pub trait Storage: Send {
    /// True if and only if no identity is currently persisted.
    fn is_empty(&mut self) -> Result<bool, AuthError>;

    /// The persisted identity, or `None` when storage is empty.
    fn read(&mut self) -> Result<Option<IdentityRef>, AuthError>;

    /// Persists the identity, replacing any previous one.
    fn write(&mut self, identity: IdentityRef) -> Result<(), AuthError>;

    /// Removes the persisted identity, if any.
    fn clear(&mut self) -> Result<(), AuthError>;
}
