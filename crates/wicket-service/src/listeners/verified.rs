// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Veto listener for unverified accounts.

use tracing::warn;

use wicket_core::{AuthResult, IdentityRef, ResultCode};

use crate::event::{AuthEvent, Stage};
use crate::listener::{Listener, Reaction, DEFAULT_LISTENER_PRIORITY};
use crate::service::AuthenticationService;

/// Replaces a valid result with `NotVerified` when the authenticated
/// identity has not completed verification.
///
/// Inert when the result is already invalid or the identity does not
/// expose the verification capability.
pub struct VerifiedUserListener;

impl VerifiedUserListener {
    pub const PRIORITY: i32 = DEFAULT_LISTENER_PRIORITY;

    /// Subscribes this listener to the `Auth` stage at its default
    /// priority.
    pub fn attach_to(service: &mut AuthenticationService) {
        service.listen(Stage::Auth, Self::PRIORITY, Box::new(Self));
    }
}

impl Listener for VerifiedUserListener {
    fn on_event(&self, event: &mut AuthEvent) -> Option<Reaction> {
        let Some(result) = event.result() else {
            return None;
        };
        if !result.is_valid() {
            return None;
        }
        let Some(identity) = result.identity().map(IdentityRef::clone) else {
            return None;
        };

        if identity
            .as_verifiable()
            .is_some_and(|verifiable| !verifiable.is_verified())
        {
            warn!("authenticated identity is not verified, replacing result");
            event.set_result(AuthResult::new(
                ResultCode::NotVerified,
                Some(identity),
                vec!["Your account is not verified yet.".to_string()],
            ));
        }

        None
    }
}
