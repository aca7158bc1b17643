// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed enumeration of authentication result codes.
//!
//! The numeric mapping is fixed and load-bearing: codes are persisted and
//! logged by host applications, so reordering or renumbering variants is a
//! breaking change. Validity is a predicate over the raw code, not a
//! separate flag: any code greater than zero is a success.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Outcome code carried by every [`AuthResult`](crate::AuthResult).
///
/// `Success` is the only valid code. Everything at or below zero is a
/// domain failure of some kind, returned to the caller as a value rather
/// than an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize,
    Deserialize,
)]
#[repr(i8)]
pub enum ResultCode {
    /// Authentication succeeded.
    Success = 1,
    /// General, unspecified failure.
    Failure = 0,
    /// No record matched the supplied identity.
    IdentityNotFound = -1,
    /// More than one record matched the supplied identity.
    IdentityAmbiguous = -2,
    /// A record matched but the supplied credential did not.
    CredentialInvalid = -3,
    /// Failure for an unknown or not-yet-determined reason. This is the
    /// starting state of every authentication attempt before an outcome
    /// has been computed.
    Uncategorized = -4,
    /// The session was terminated by an explicit logout.
    Logout = -5,
    /// The account is banned.
    Banned = -6,
    /// The account has not completed verification.
    NotVerified = -7,
    /// Too many login attempts.
    LoginAttempt = -8,
}

impl ResultCode {
    /// All known codes, used to seed the default message table.
    pub const ALL: [ResultCode; 10] = [
        ResultCode::Success,
        ResultCode::Failure,
        ResultCode::IdentityNotFound,
        ResultCode::IdentityAmbiguous,
        ResultCode::CredentialInvalid,
        ResultCode::Uncategorized,
        ResultCode::Logout,
        ResultCode::Banned,
        ResultCode::NotVerified,
        ResultCode::LoginAttempt,
    ];

    /// The raw signed code, stable across releases.
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Validity predicate: `code > 0`.
    pub fn is_valid(self) -> bool {
        self.as_i8() > 0
    }

    /// Recovers a code from its raw value, e.g. when rehydrating a logged
    /// outcome. Unknown values yield `None`.
    pub fn from_i8(raw: i8) -> Option<ResultCode> {
        ResultCode::ALL.into_iter().find(|code| code.as_i8() == raw)
    }
}
