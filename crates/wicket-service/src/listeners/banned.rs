// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Veto listener for banned accounts.

use tracing::warn;

use wicket_core::{AuthResult, IdentityRef, ResultCode};

use crate::event::{AuthEvent, Stage};
use crate::listener::{Listener, Reaction, DEFAULT_LISTENER_PRIORITY};
use crate::service::AuthenticationService;

/// Replaces a valid result with `Banned` when the authenticated identity
/// reports itself banned.
///
/// Inert when the result is already invalid or the identity does not
/// expose the ban capability.
pub struct BannedUserListener;

impl BannedUserListener {
    pub const PRIORITY: i32 = DEFAULT_LISTENER_PRIORITY;

    /// Subscribes this listener to the `Auth` stage at its default
    /// priority.
    pub fn attach_to(service: &mut AuthenticationService) {
        service.listen(Stage::Auth, Self::PRIORITY, Box::new(Self));
    }
}

impl Listener for BannedUserListener {
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
            .as_bannable()
            .is_some_and(|bannable| bannable.is_banned())
        {
            warn!("authenticated identity is banned, replacing result");
            event.set_result(AuthResult::new(
                ResultCode::Banned,
                Some(identity),
                vec!["Your account has been banned.".to_string()],
            ));
        }

        None
    }
}
