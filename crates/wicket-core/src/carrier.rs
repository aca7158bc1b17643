// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque request/response carriers.
//!
//! The pipeline attaches an inbound request to the per-call event and may
//! hand back a transport response produced by a listener (e.g. a redirect).
//! The core never inspects either beyond type identity; `as_any` lets the
//! host application recover its concrete types at the boundary.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An inbound request attached to the authentication event.
pub trait Request: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A terminal transport response produced by a listener. When a listener
/// short-circuits dispatch with one of these, the service attaches it to
/// the final result as an observable side channel.
pub trait Response: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a request.
pub type RequestRef = Arc<dyn Request>;

/// Shared handle to a response.
pub type ResponseRef = Arc<dyn Response>;
