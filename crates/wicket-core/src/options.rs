// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-adapter and per-service configuration.
//!
//! `AuthOptions` is a plain serde struct so host applications can embed it
//! in their own configuration files; every field has a default. Each
//! adapter owns its options exclusively unless a shared copy is injected
//! on purpose.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::code::ResultCode;
use crate::error::AuthError;

/// Default identity TTL: two weeks, in seconds.
pub const REMEMBER_ME_SECONDS: u64 = 1_209_600;

/// Default hashing cost. Deliberately moderate: higher values make every
/// failed login attempt proportionally more expensive for the server too.
pub const DEFAULT_CRYPT_COST: u32 = 10;

/// Configuration for an authentication adapter or service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthOptions {
    identity_property: String,
    credential_property: String,
    expired_time_secs: u64,
    crypt_cost: u32,
    result_messages: BTreeMap<ResultCode, String>,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            identity_property: "username".to_string(),
            credential_property: "password".to_string(),
            expired_time_secs: REMEMBER_ME_SECONDS,
            crypt_cost: DEFAULT_CRYPT_COST,
            result_messages: default_result_messages(),
        }
    }
}

/// The default human message for every known result code.
fn default_result_messages() -> BTreeMap<ResultCode, String> {
    let mut messages = BTreeMap::new();
    for code in ResultCode::ALL {
        let message = match code {
            ResultCode::Success => "Authentication success.",
            ResultCode::Failure => "General failure.",
            ResultCode::IdentityNotFound => {
                "An User account with the supplied identity could not be found."
            }
            ResultCode::IdentityAmbiguous => "More than one record matches the supplied identity.",
            ResultCode::CredentialInvalid => "Supplied credential is invalid.",
            ResultCode::Uncategorized => "Failure due to unknown reasons.",
            ResultCode::Logout => "Logout success.",
            ResultCode::Banned => "Your account has been banned.",
            ResultCode::NotVerified => "Your account is not verified yet.",
            ResultCode::LoginAttempt => {
                "You exceeded the maximum allowed number of login attempt."
            }
        };
        messages.insert(code, message.to_string());
    }
    messages
}

impl AuthOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the record property holding the identity (e.g. `username`).
    pub fn identity_property(&self) -> &str {
        &self.identity_property
    }

    /// Replaces the identity property name. Empty names are rejected.
    pub fn set_identity_property(
        &mut self,
        property: impl Into<String>,
    ) -> Result<&mut Self, AuthError> {
        let property = property.into();
        if property.is_empty() {
            return Err(AuthError::InvalidOption(
                "provided identity property is invalid: empty string".to_string(),
            ));
        }
        self.identity_property = property;
        Ok(self)
    }

    /// Name of the record property holding the credential (e.g. `password`).
    pub fn credential_property(&self) -> &str {
        &self.credential_property
    }

    /// Replaces the credential property name. Empty names are rejected.
    pub fn set_credential_property(
        &mut self,
        property: impl Into<String>,
    ) -> Result<&mut Self, AuthError> {
        let property = property.into();
        if property.is_empty() {
            return Err(AuthError::InvalidOption(
                "provided credential property is invalid: empty string".to_string(),
            ));
        }
        self.credential_property = property;
        Ok(self)
    }

    /// Seconds a persisted identity stays sticky (remember-me TTL).
    pub fn expired_time_secs(&self) -> u64 {
        self.expired_time_secs
    }

    pub fn set_expired_time_secs(&mut self, secs: u64) -> &mut Self {
        self.expired_time_secs = secs;
        self
    }

    /// Hashing cost parameter handed to the credential verifier.
    pub fn crypt_cost(&self) -> u32 {
        self.crypt_cost
    }

    pub fn set_crypt_cost(&mut self, cost: u32) -> &mut Self {
        self.crypt_cost = cost;
        self
    }

    /// The default message for a result code. Unknown entries fall back to
    /// the `Uncategorized` message.
    pub fn result_message(&self, code: ResultCode) -> &str {
        self.result_messages
            .get(&code)
            .or_else(|| self.result_messages.get(&ResultCode::Uncategorized))
            .map(String::as_str)
            .unwrap_or("Failure due to unknown reasons.")
    }

    /// Overrides the message for one code.
    pub fn set_result_message(&mut self, code: ResultCode, message: impl Into<String>) -> &mut Self {
        self.result_messages.insert(code, message.into());
        self
    }

    /// Overrides/extends messages for several codes at once.
    pub fn set_result_messages(
        &mut self,
        messages: impl IntoIterator<Item = (ResultCode, String)>,
    ) -> &mut Self {
        for (code, message) in messages {
            self.result_messages.insert(code, message);
        }
        self
    }

    /// The full code-to-message table.
    pub fn result_messages(&self) -> &BTreeMap<ResultCode, String> {
        &self.result_messages
    }
}
