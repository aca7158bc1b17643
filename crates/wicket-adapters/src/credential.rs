// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential-matching strategy over a pluggable identity repository.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::debug;

use wicket_core::{
    check_setup, Adapter, AuthError, AuthOptions, AuthResult, ResultCode, ResultRecorder,
};

use crate::clone_credential;
use crate::repository::IdentityRepository;
use crate::verifier::CredentialVerifier;

/// A single authentication strategy that looks up candidate records via an
/// [`IdentityRepository`] and checks the supplied credential via a
/// [`CredentialVerifier`].
///
/// Outcomes: no candidate record yields `IdentityNotFound`; more than one
/// candidate yields `IdentityAmbiguous` unless ambiguity is allowed, in
/// which case every candidate is tried in order; a verifier mismatch
/// across all candidates yields `CredentialInvalid`; a match yields
/// `Success` carrying the matched identity.
pub struct CredentialAdapter {
    repository: Arc<dyn IdentityRepository>,
    verifier: Arc<dyn CredentialVerifier>,
    identity: Option<String>,
    credential: Option<SecretString>,
    options: AuthOptions,
    recorder: ResultRecorder,
    allow_ambiguity: bool,
}

impl CredentialAdapter {
    pub fn new(
        repository: Arc<dyn IdentityRepository>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            repository,
            verifier,
            identity: None,
            credential: None,
            options: AuthOptions::default(),
            recorder: ResultRecorder::new(),
            allow_ambiguity: false,
        }
    }

    /// Whether multiple records matching the identity are tolerated. When
    /// false (the default), a multi-record match is reported as
    /// `IdentityAmbiguous` without touching the credential.
    pub fn allow_ambiguity(&self) -> bool {
        self.allow_ambiguity
    }

    pub fn set_allow_ambiguity(&mut self, allow: bool) -> &mut Self {
        self.allow_ambiguity = allow;
        self
    }
}

impl Clone for CredentialAdapter {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            verifier: Arc::clone(&self.verifier),
            identity: self.identity.clone(),
            credential: clone_credential(self.credential.as_ref()),
            options: self.options.clone(),
            recorder: self.recorder.clone(),
            allow_ambiguity: self.allow_ambiguity,
        }
    }
}

impl Adapter for CredentialAdapter {
    fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    fn set_identity(&mut self, identity: Option<String>) {
        self.identity = identity;
    }

    fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    fn set_credential(&mut self, credential: Option<SecretString>) {
        self.credential = credential;
    }

    fn options(&self) -> &AuthOptions {
        &self.options
    }

    fn set_options(&mut self, options: AuthOptions) {
        self.options = options;
    }

    fn authenticate(&mut self) -> Result<AuthResult, AuthError> {
        check_setup(self.identity.as_deref(), self.credential.as_ref())?;
        self.recorder
            .record(ResultCode::Uncategorized, None, Vec::new());

        // Both present, checked above.
        let identity_value = self.identity.clone().unwrap_or_default();
        let Some(credential) = self.credential.as_ref() else {
            return Err(AuthError::Setup(
                "a credential value was not provided".to_string(),
            ));
        };

        let candidates = self.repository.find(&identity_value)?;

        if candidates.is_empty() {
            debug!(identity = %identity_value, "no record matched the identity");
            self.recorder
                .record(ResultCode::IdentityNotFound, None, Vec::new());
            return Ok(self.recorder.finish(&self.options));
        }

        if candidates.len() > 1 && !self.allow_ambiguity {
            debug!(
                identity = %identity_value,
                matches = candidates.len(),
                "ambiguous identity"
            );
            self.recorder
                .record(ResultCode::IdentityAmbiguous, None, Vec::new());
            return Ok(self.recorder.finish(&self.options));
        }

        for record in &candidates {
            if self.verifier.verify(credential, &record.credential_hash)? {
                self.recorder.record(
                    ResultCode::Success,
                    Some(Arc::clone(&record.identity)),
                    Vec::new(),
                );
                return Ok(self.recorder.finish(&self.options));
            }
        }

        debug!(identity = %identity_value, "credential mismatch");
        self.recorder
            .record(ResultCode::CredentialInvalid, None, Vec::new());
        Ok(self.recorder.finish(&self.options))
    }

    fn logout(&mut self) -> AuthResult {
        self.recorder.record(ResultCode::Logout, None, Vec::new());
        self.identity = None;
        self.credential = None;
        self.recorder.finish(&self.options)
    }

    fn boxed_clone(&self) -> Box<dyn Adapter> {
        Box::new(self.clone())
    }
}
