// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wicket authentication framework.
//!
//! This crate provides the result model, per-adapter options, error types,
//! and the boundary traits (adapter, storage, identity capabilities,
//! request/response carriers) shared by the rest of the workspace. The
//! orchestration itself lives in `wicket-service`; concrete strategies live
//! in `wicket-adapters`.

pub mod adapter;
pub mod carrier;
pub mod code;
pub mod error;
pub mod identity;
pub mod options;
pub mod result;
pub mod storage;

// Re-export key items at crate root for ergonomic imports.
pub use adapter::{check_setup, Adapter, ResultRecorder};
pub use carrier::{Request, RequestRef, Response, ResponseRef};
pub use code::ResultCode;
pub use error::AuthError;
pub use identity::{Bannable, Identity, IdentityRef, Verifiable};
pub use options::{AuthOptions, DEFAULT_CRYPT_COST, REMEMBER_ME_SECONDS};
pub use result::AuthResult;
pub use storage::Storage;
