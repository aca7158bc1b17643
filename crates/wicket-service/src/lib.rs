// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event-driven authentication orchestration.
//!
//! [`AuthenticationService`] runs an adapter, threads the outcome through a
//! staged listener pipeline, and persists the winning identity in storage.
//! The built-in [`BannedUserListener`] and [`VerifiedUserListener`] veto
//! otherwise-successful attempts based on identity capabilities.

pub mod event;
pub mod listener;
pub mod listeners;
pub mod service;

pub use event::{AuthEvent, Stage};
pub use listener::{Listener, Reaction, DEFAULT_LISTENER_PRIORITY};
pub use listeners::{BannedUserListener, VerifiedUserListener};
pub use service::AuthenticationService;
