// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity storage backends for the Wicket authentication framework.
//!
//! The orchestration layer only depends on the
//! [`Storage`](wicket_core::Storage) trait; this crate supplies the
//! in-process implementation used by default and by the test suites. Hosts
//! with a real session transport implement the trait over it instead.

pub mod memory;

pub use memory::MemoryStorage;
