// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The adapter contract shared by every authentication strategy.
//!
//! An adapter owns the supplied identity/credential pair, its options, and
//! knows how to turn an attempt into exactly one [`AuthResult`]. Chains of
//! adapters satisfy this same contract, which is what makes them
//! composable.

use secrecy::SecretString;

use crate::code::ResultCode;
use crate::error::AuthError;
use crate::identity::IdentityRef;
use crate::options::AuthOptions;
use crate::result::AuthResult;

/// A single authentication strategy.
///
/// All strategies share the same precondition: `authenticate` fails with
/// [`AuthError::Setup`] before any comparison logic runs when the identity
/// or credential has not been supplied. Domain outcomes (not found,
/// mismatch, ...) are never errors; they come back as non-valid results.
pub trait Adapter: Send {
    /// The supplied identity value (e.g. a username), if set.
    fn identity(&self) -> Option<&str>;

    /// Sets or clears the identity for binding.
    fn set_identity(&mut self, identity: Option<String>);

    /// The supplied credential, if set.
    fn credential(&self) -> Option<&SecretString>;

    /// Sets or clears the credential for binding.
    fn set_credential(&mut self, credential: Option<SecretString>);

    fn options(&self) -> &AuthOptions;

    fn set_options(&mut self, options: AuthOptions);

    /// Performs one authentication attempt, producing exactly one result.
    fn authenticate(&mut self) -> Result<AuthResult, AuthError>;

    /// Always succeeds: records a `Logout` outcome, clears the identity and
    /// credential, and returns the result.
    fn logout(&mut self) -> AuthResult;

    /// Deep copy as a boxed trait object, used by chain cloning.
    fn boxed_clone(&self) -> Box<dyn Adapter>;
}

impl Clone for Box<dyn Adapter> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Verifies the shared authenticate precondition: both the identity and the
/// credential must be present before any strategy logic runs.
pub fn check_setup(
    identity: Option<&str>,
    credential: Option<&SecretString>,
) -> Result<(), AuthError> {
    if identity.is_none() {
        return Err(AuthError::Setup(
            "a value for the identity was not provided".to_string(),
        ));
    }
    if credential.is_none() {
        return Err(AuthError::Setup(
            "a credential value was not provided".to_string(),
        ));
    }
    Ok(())
}

/// Accumulates the outcome of an attempt as a strategy runs, then finishes
/// it into an [`AuthResult`] with message defaulting from the options.
///
/// Strategies reset the recorder to `Uncategorized` at the start of every
/// attempt, overwrite it as the outcome becomes known, and call
/// [`finish`](ResultRecorder::finish) once at the end.
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    code: ResultCode,
    identity: Option<IdentityRef>,
    messages: Vec<String>,
}

impl ResultRecorder {
    /// A fresh recorder in the default starting state.
    pub fn new() -> Self {
        Self {
            code: ResultCode::Uncategorized,
            identity: None,
            messages: Vec::new(),
        }
    }

    /// Overwrites the recorded outcome.
    pub fn record(
        &mut self,
        code: ResultCode,
        identity: Option<IdentityRef>,
        messages: Vec<String>,
    ) {
        self.code = code;
        self.identity = identity;
        self.messages = messages;
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// Builds the result. When no explicit message was recorded, the
    /// options' code-to-message table supplies a one-element message list
    /// for the final code.
    pub fn finish(&self, options: &AuthOptions) -> AuthResult {
        let messages = if self.messages.is_empty() {
            vec![options.result_message(self.code).to_string()]
        } else {
            self.messages.clone()
        };
        AuthResult::new(self.code, self.identity.clone(), messages)
    }
}

impl Default for ResultRecorder {
    fn default() -> Self {
        Self::new()
    }
}
