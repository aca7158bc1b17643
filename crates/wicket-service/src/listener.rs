// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The listener contract for pipeline stages.
//!
//! Each stage dispatches its listeners in descending priority, ties in
//! registration order. A listener influences the outcome in one of two
//! ways: mutate the event's result in place and return `None` (later
//! listeners still run and see the new result), or return a [`Reaction`]
//! (dispatch stops immediately and the reaction becomes terminal).

use wicket_core::{AuthResult, ResponseRef};

use crate::event::AuthEvent;

/// Priority at which the built-in decision listeners subscribe. Low, so
/// application listeners registered at the default `0` run before them.
pub const DEFAULT_LISTENER_PRIORITY: i32 = -500;

/// Terminal value a listener may short-circuit a stage with.
pub enum Reaction {
    /// A transport response (e.g. a redirect). Dispatch stops; the service
    /// attaches the response to the final result as a side channel.
    Respond(ResponseRef),
    /// A replacement result. Dispatch stops and this becomes the stage's
    /// result.
    Resolve(AuthResult),
}

/// A handler subscribed to a pipeline stage.
pub trait Listener: Send + Sync {
    fn on_event(&self, event: &mut AuthEvent) -> Option<Reaction>;
}

/// A listener registration held by the service.
pub(crate) struct Registration {
    pub(crate) stage: crate::event::Stage,
    pub(crate) priority: i32,
    pub(crate) listener: Box<dyn Listener>,
}
