// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential hashing and verification.
//!
//! The adapter core never hashes directly; it goes through the
//! [`CredentialVerifier`] seam so the hashing scheme is swappable. The
//! default implementation is Argon2id with the cost taken from
//! [`AuthOptions::crypt_cost`](wicket_core::AuthOptions::crypt_cost).

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use secrecy::{ExposeSecret, SecretString};

use wicket_core::{AuthError, AuthOptions};

/// Hashes and verifies credentials.
///
/// `verify` distinguishes a mismatch (Ok(false), a domain outcome) from a
/// broken hashing setup (Err, e.g. a malformed stored hash).
pub trait CredentialVerifier: Send + Sync {
    /// Hashes a secret for storage.
    fn hash(&self, secret: &SecretString) -> Result<String, AuthError>;

    /// Checks a secret against a stored hash.
    fn verify(&self, secret: &SecretString, hash: &str) -> Result<bool, AuthError>;
}

/// Argon2id verifier. The configured cost maps to the iteration count;
/// memory and parallelism stay at the library defaults.
pub struct Argon2Verifier {
    cost: u32,
}

impl Argon2Verifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Builds a verifier with the cost configured in the options.
    pub fn from_options(options: &AuthOptions) -> Self {
        Self::new(options.crypt_cost())
    }

    fn hasher(&self) -> Result<Argon2<'static>, AuthError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            self.cost.max(Params::MIN_T_COST),
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|err| AuthError::Crypt(format!("invalid argon2 parameters: {err}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn hash(&self, secret: &SecretString) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()?
            .hash_password(secret.expose_secret().as_bytes(), &salt)
            .map_err(|err| AuthError::Crypt(format!("hashing failed: {err}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, secret: &SecretString, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|err| AuthError::Crypt(format!("malformed stored hash: {err}")))?;
        match self
            .hasher()?
            .verify_password(secret.expose_secret().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AuthError::Crypt(format!("verification failed: {err}"))),
        }
    }
}
