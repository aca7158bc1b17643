// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in decision listeners.

mod banned;
mod verified;

pub use banned::BannedUserListener;
pub use verified::VerifiedUserListener;
