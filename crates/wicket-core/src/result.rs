// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable outcome of an authentication or logout attempt.

use crate::carrier::ResponseRef;
use crate::code::ResultCode;
use crate::identity::IdentityRef;

/// Outcome of a single authentication or logout attempt.
///
/// A result is constructed once per adapter invocation (or per listener
/// override) and never mutated afterwards: listeners that want a different
/// outcome replace the whole result. The one exception is the response side
/// channel, which the service attaches after pipeline dispatch when a
/// listener short-circuited with a transport response.
#[derive(Debug, Clone)]
pub struct AuthResult {
    code: ResultCode,
    identity: Option<IdentityRef>,
    messages: Vec<String>,
    response: Option<ResponseRef>,
}

impl AuthResult {
    /// Creates a result with the given code, identity, and messages.
    pub fn new(code: ResultCode, identity: Option<IdentityRef>, messages: Vec<String>) -> Self {
        Self {
            code,
            identity,
            messages,
            response: None,
        }
    }

    /// Shorthand for a successful result carrying an identity.
    pub fn success(identity: IdentityRef) -> Self {
        Self::new(ResultCode::Success, Some(identity), Vec::new())
    }

    /// Shorthand for a failure result with no identity.
    pub fn failure(code: ResultCode, messages: Vec<String>) -> Self {
        Self::new(code, None, messages)
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// Validity predicate: `code > 0`.
    pub fn is_valid(&self) -> bool {
        self.code.is_valid()
    }

    /// The authenticated principal, present on success-like results.
    pub fn identity(&self) -> Option<&IdentityRef> {
        self.identity.as_ref()
    }

    /// Human-readable messages describing the outcome, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The transport response a listener short-circuited with, if any.
    pub fn response(&self) -> Option<&ResponseRef> {
        self.response.as_ref()
    }

    /// Attaches the transport response side channel. Called by the service
    /// after dispatch; the outcome itself is unaffected.
    pub fn attach_response(&mut self, response: ResponseRef) {
        self.response = Some(response);
    }
}
