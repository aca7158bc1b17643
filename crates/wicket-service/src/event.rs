// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-call authentication context threaded through the pipeline.
//!
//! One event is constructed fresh for every service call and dropped when
//! the call returns; nothing is reused across calls, so a service instance
//! never leaks state from one attempt into the next.

use strum::{Display, EnumString};

use wicket_core::{AuthResult, IdentityRef, RequestRef};

/// The four named dispatch points of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Stage {
    /// Right after the adapter ran; listeners here may veto or replace the
    /// adapter's result.
    #[strum(serialize = "authenticate")]
    Auth,
    /// The reconciled result was invalid.
    #[strum(serialize = "authenticate.failed")]
    AuthFailed,
    /// A logout completed and the stored identity was cleared.
    #[strum(serialize = "authenticate.logout")]
    AuthLogout,
    /// The reconciled result was valid and the identity was persisted.
    #[strum(serialize = "authenticate.success")]
    AuthSuccess,
}

/// Mutable context carried through one authentication or logout call.
///
/// Listeners inspect and may replace the result; the identity tracks the
/// result's identity so both views stay consistent.
#[derive(Debug, Clone)]
pub struct AuthEvent {
    stage: Stage,
    identity: Option<IdentityRef>,
    result: Option<AuthResult>,
    request: Option<RequestRef>,
}

impl AuthEvent {
    pub fn new() -> Self {
        Self {
            stage: Stage::Auth,
            identity: None,
            result: None,
            request: None,
        }
    }

    /// The stage currently being dispatched.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn set_stage(&mut self, stage: Stage) -> &mut Self {
        self.stage = stage;
        self
    }

    pub fn identity(&self) -> Option<&IdentityRef> {
        self.identity.as_ref()
    }

    /// Sets the identity. Clearing the identity also clears any previously
    /// attached result, so the event never carries a result for an
    /// identity that is gone.
    pub fn set_identity(&mut self, identity: Option<IdentityRef>) -> &mut Self {
        if identity.is_none() {
            self.result = None;
        }
        self.identity = identity;
        self
    }

    pub fn result(&self) -> Option<&AuthResult> {
        self.result.as_ref()
    }

    /// Attaches a result. A result carrying an identity re-propagates that
    /// identity onto the event.
    pub fn set_result(&mut self, result: AuthResult) -> &mut Self {
        if let Some(identity) = result.identity() {
            self.identity = Some(IdentityRef::clone(identity));
        }
        self.result = Some(result);
        self
    }

    /// Drops the attached result, keeping the identity.
    pub fn clear_result(&mut self) -> &mut Self {
        self.result = None;
        self
    }

    pub fn request(&self) -> Option<&RequestRef> {
        self.request.as_ref()
    }

    pub fn set_request(&mut self, request: RequestRef) -> &mut Self {
        self.request = Some(request);
        self
    }
}

impl Default for AuthEvent {
    fn default() -> Self {
        Self::new()
    }
}
