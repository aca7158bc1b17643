// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An ordered, prioritized chain of authentication adapters.
//!
//! Adapters run in descending priority, ties broken by insertion order.
//! Ordering is computed by a stable sort over a snapshot of the entries at
//! iteration time rather than a heap: the chain is iterated, merged, and
//! cloned, so the order must be deterministic and re-enumerable.
//!
//! By default the chain stops at the first failing adapter
//! (break-on-failure); adapters after the failure are never invoked and do
//! not appear in the results.

use secrecy::SecretString;
use tracing::debug;

use wicket_core::{
    check_setup, Adapter, AuthError, AuthOptions, AuthResult, ResultCode, ResultRecorder,
};

use crate::clone_credential;

/// Priority assigned by [`AdapterChain::attach`] when none is given.
pub const DEFAULT_PRIORITY: i32 = 1;

#[derive(Clone)]
struct ChainEntry {
    adapter: Box<dyn Adapter>,
    priority: i32,
    seq: u64,
}

/// An ordered multiset of `(adapter, priority)` pairs that itself satisfies
/// the [`Adapter`] contract, so chains compose wherever a single strategy
/// is expected.
///
/// The same adapter may be attached more than once; there is no uniqueness
/// constraint.
pub struct AdapterChain {
    entries: Vec<ChainEntry>,
    next_seq: u64,
    results: Vec<AuthResult>,
    break_on_failure: bool,
    identity: Option<String>,
    credential: Option<SecretString>,
    options: AuthOptions,
    recorder: ResultRecorder,
}

impl AdapterChain {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
            results: Vec::new(),
            break_on_failure: true,
            identity: None,
            credential: None,
            options: AuthOptions::default(),
            recorder: ResultRecorder::new(),
        }
    }

    /// If true (the default), a failing adapter stops the chain: the
    /// remaining adapters are skipped and do not appear in the results.
    pub fn break_on_failure(&self) -> bool {
        self.break_on_failure
    }

    pub fn set_break_on_failure(&mut self, break_on_failure: bool) -> &mut Self {
        self.break_on_failure = break_on_failure;
        self
    }

    /// Attaches an adapter at the given priority. Higher priorities run
    /// earlier; equal priorities run in insertion order.
    pub fn attach(&mut self, adapter: Box<dyn Adapter>, priority: i32) -> &mut Self {
        self.entries.push(ChainEntry {
            adapter,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self
    }

    /// Attaches an adapter so it runs before every current entry: its
    /// priority is the maximum attached priority plus one, or the default
    /// when the chain is empty.
    pub fn prepend_adapter(&mut self, adapter: Box<dyn Adapter>) -> &mut Self {
        let priority = self
            .entries
            .iter()
            .map(|entry| entry.priority)
            .max()
            .map(|max| max + 1)
            .unwrap_or(DEFAULT_PRIORITY);
        self.attach(adapter, priority)
    }

    /// Re-attaches every adapter of `other`, preserving its priorities.
    pub fn merge(&mut self, other: &AdapterChain) -> &mut Self {
        for entry in &other.entries {
            self.attach(entry.adapter.boxed_clone(), entry.priority);
        }
        self
    }

    /// Replaces all attached adapters.
    pub fn set_adapters(&mut self, adapters: Vec<(Box<dyn Adapter>, i32)>) -> &mut Self {
        self.entries.clear();
        for (adapter, priority) in adapters {
            self.attach(adapter, priority);
        }
        self
    }

    /// Removes all previously attached adapters.
    pub fn clear_adapters(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The attached adapters in execution order.
    pub fn adapters(&self) -> Vec<&dyn Adapter> {
        self.ordered_indices()
            .into_iter()
            .map(|idx| self.entries[idx].adapter.as_ref())
            .collect()
    }

    /// The per-adapter results accumulated by the last `authenticate_all`
    /// or `logout_all` call.
    pub fn results(&self) -> &[AuthResult] {
        &self.results
    }

    /// Combines the message lists of all accumulated results into one,
    /// later results overriding earlier ones position by position and
    /// extending past them.
    pub fn messages(&self) -> Vec<String> {
        let mut merged: Vec<String> = Vec::new();
        for result in &self.results {
            for (idx, message) in result.messages().iter().enumerate() {
                if idx < merged.len() {
                    merged[idx] = message.clone();
                } else {
                    merged.push(message.clone());
                }
            }
        }
        merged
    }

    /// Runs the chain, returning every per-adapter result in execution
    /// order. Fails fast when the chain is empty or the identity/credential
    /// pair has not been supplied.
    pub fn authenticate_all(&mut self) -> Result<&[AuthResult], AuthError> {
        if self.entries.is_empty() {
            return Err(AuthError::Setup(
                "a value for the adapter was not provided".to_string(),
            ));
        }

        self.results.clear();
        check_setup(self.identity.as_deref(), self.credential.as_ref())?;
        self.recorder
            .record(ResultCode::Uncategorized, None, Vec::new());

        // Snapshot the order up front; attachments during iteration are not
        // supported.
        for idx in self.ordered_indices() {
            let result = self.entries[idx].adapter.authenticate()?;
            let valid = result.is_valid();
            debug!(code = %result.code(), valid, "chain adapter finished");
            self.results.push(result);
            if !valid && self.break_on_failure {
                break;
            }
        }

        Ok(&self.results)
    }

    /// Logs out every attached adapter unconditionally (no break policy)
    /// and collects all results. An empty chain still yields one default
    /// `Logout` result, so the return value is never empty.
    pub fn logout_all(&mut self) -> &[AuthResult] {
        self.results.clear();
        self.recorder.record(ResultCode::Logout, None, Vec::new());

        for idx in self.ordered_indices() {
            let result = self.entries[idx].adapter.logout();
            self.results.push(result);
        }

        self.identity = None;
        self.credential = None;

        if self.results.is_empty() {
            self.results.push(self.recorder.finish(&self.options));
        }

        &self.results
    }

    /// Indices of `entries` sorted by (priority desc, insertion seq asc).
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.entries.len()).collect();
        indices.sort_by(|&a, &b| {
            self.entries[b]
                .priority
                .cmp(&self.entries[a].priority)
                .then(self.entries[a].seq.cmp(&self.entries[b].seq))
        });
        indices
    }
}

impl Default for AdapterChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AdapterChain {
    /// Deep-copies the adapter collection, so mutations on the clone do not
    /// affect the original.
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            next_seq: self.next_seq,
            results: self.results.clone(),
            break_on_failure: self.break_on_failure,
            identity: self.identity.clone(),
            credential: clone_credential(self.credential.as_ref()),
            options: self.options.clone(),
            recorder: self.recorder.clone(),
        }
    }
}

impl Adapter for AdapterChain {
    fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Sets the identity on the chain and on every attached adapter.
    fn set_identity(&mut self, identity: Option<String>) {
        for entry in &mut self.entries {
            entry.adapter.set_identity(identity.clone());
        }
        self.identity = identity;
    }

    fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    /// Sets the credential on the chain and on every attached adapter.
    fn set_credential(&mut self, credential: Option<SecretString>) {
        for entry in &mut self.entries {
            entry
                .adapter
                .set_credential(clone_credential(credential.as_ref()));
        }
        self.credential = credential;
    }

    fn options(&self) -> &AuthOptions {
        &self.options
    }

    fn set_options(&mut self, options: AuthOptions) {
        self.options = options;
    }

    /// Runs the chain and folds it into the final per-adapter result: the
    /// first failure under break-on-failure, otherwise the last result.
    fn authenticate(&mut self) -> Result<AuthResult, AuthError> {
        self.authenticate_all()?;
        self.results
            .last()
            .cloned()
            .ok_or_else(|| AuthError::Stopped("adapter chain produced no result".to_string()))
    }

    fn logout(&mut self) -> AuthResult {
        self.logout_all();
        self.results
            .last()
            .cloned()
            .unwrap_or_else(|| self.recorder.finish(&self.options))
    }

    fn boxed_clone(&self) -> Box<dyn Adapter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted strategy used to observe chain behavior.
    #[derive(Clone)]
    struct StubAdapter {
        outcome: ResultCode,
        message: Option<String>,
        calls: Arc<AtomicUsize>,
        identity: Option<String>,
        credential: Option<SecretString>,
        options: AuthOptions,
    }

    impl StubAdapter {
        fn new(outcome: ResultCode) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    outcome,
                    message: None,
                    calls: Arc::clone(&calls),
                    identity: None,
                    credential: None,
                    options: AuthOptions::default(),
                },
                calls,
            )
        }

        fn with_message(outcome: ResultCode, message: &str) -> Self {
            let (mut stub, _) = Self::new(outcome);
            stub.message = Some(message.to_string());
            stub
        }
    }

    impl Adapter for StubAdapter {
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
            self.calls.fetch_add(1, Ordering::SeqCst);
            let messages = self.message.iter().cloned().collect();
            Ok(AuthResult::new(self.outcome, None, messages))
        }

        fn logout(&mut self) -> AuthResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.identity = None;
            self.credential = None;
            AuthResult::new(ResultCode::Logout, None, vec!["Logout success.".to_string()])
        }

        fn boxed_clone(&self) -> Box<dyn Adapter> {
            Box::new(self.clone())
        }
    }

    fn armed_chain() -> AdapterChain {
        let mut chain = AdapterChain::new();
        chain.set_identity(Some("bob".to_string()));
        chain.set_credential(Some(SecretString::from("secret".to_string())));
        chain
    }

    #[test]
    fn empty_chain_fails_setup() {
        let mut chain = armed_chain();
        let err = chain.authenticate_all().unwrap_err();
        assert!(matches!(err, AuthError::Setup(_)), "{err}");
    }

    #[test]
    fn missing_identity_fails_before_any_adapter_runs() {
        let (stub, calls) = StubAdapter::new(ResultCode::Success);
        let mut chain = AdapterChain::new();
        chain.attach(Box::new(stub), DEFAULT_PRIORITY);
        chain.set_credential(Some(SecretString::from("secret".to_string())));

        let err = chain.authenticate_all().unwrap_err();
        assert!(matches!(err, AuthError::Setup(_)), "{err}");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_credential_fails_before_any_adapter_runs() {
        let (stub, calls) = StubAdapter::new(ResultCode::Success);
        let mut chain = AdapterChain::new();
        chain.attach(Box::new(stub), DEFAULT_PRIORITY);
        chain.set_identity(Some("bob".to_string()));

        let err = chain.authenticate_all().unwrap_err();
        assert!(matches!(err, AuthError::Setup(_)), "{err}");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn higher_priority_runs_first_and_ties_keep_insertion_order() {
        let mut chain = armed_chain();
        let low = StubAdapter::with_message(ResultCode::Failure, "low");
        let first_high = StubAdapter::with_message(ResultCode::Success, "first-high");
        let second_high = StubAdapter::with_message(ResultCode::Success, "second-high");
        chain
            .attach(Box::new(low), 1)
            .attach(Box::new(first_high), 5)
            .attach(Box::new(second_high), 5)
            .set_break_on_failure(false);

        let results: Vec<String> = chain
            .authenticate_all()
            .expect("chain runs")
            .iter()
            .map(|result| result.messages()[0].clone())
            .collect();
        assert_eq!(results, ["first-high", "second-high", "low"]);
    }

    #[test]
    fn break_on_failure_truncates_results_and_skips_the_rest() {
        let mut chain = armed_chain();
        let (first, first_calls) = StubAdapter::new(ResultCode::Success);
        let (second, second_calls) = StubAdapter::new(ResultCode::CredentialInvalid);
        let (third, third_calls) = StubAdapter::new(ResultCode::Success);
        chain
            .attach(Box::new(first), 3)
            .attach(Box::new(second), 2)
            .attach(Box::new(third), 1);

        let results = chain.authenticate_all().expect("chain runs");
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].code(), ResultCode::CredentialInvalid);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn without_break_on_failure_every_adapter_runs() {
        let mut chain = armed_chain();
        let (first, _) = StubAdapter::new(ResultCode::Failure);
        let (second, _) = StubAdapter::new(ResultCode::Failure);
        let (third, third_calls) = StubAdapter::new(ResultCode::Success);
        chain
            .attach(Box::new(first), 3)
            .attach(Box::new(second), 2)
            .attach(Box::new(third), 1)
            .set_break_on_failure(false);

        let results = chain.authenticate_all().expect("chain runs");
        assert_eq!(results.len(), 3);
        assert_eq!(third_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn prepend_adapter_runs_before_all_current_entries() {
        let mut chain = armed_chain();
        chain
            .attach(
                Box::new(StubAdapter::with_message(ResultCode::Success, "a")),
                7,
            )
            .attach(
                Box::new(StubAdapter::with_message(ResultCode::Success, "b")),
                3,
            );
        chain.prepend_adapter(Box::new(StubAdapter::with_message(
            ResultCode::Success,
            "prepended",
        )));

        let results = chain.authenticate_all().expect("chain runs");
        assert_eq!(results[0].messages(), ["prepended"]);
    }

    #[test]
    fn prepend_on_empty_chain_uses_default_priority() {
        let mut chain = armed_chain();
        chain.prepend_adapter(Box::new(StubAdapter::with_message(
            ResultCode::Success,
            "only",
        )));
        assert_eq!(chain.len(), 1);
        let results = chain.authenticate_all().expect("chain runs");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn merge_preserves_original_priorities() {
        let mut other = AdapterChain::new();
        other.attach(
            Box::new(StubAdapter::with_message(ResultCode::Success, "merged-high")),
            10,
        );

        let mut chain = armed_chain();
        chain.attach(
            Box::new(StubAdapter::with_message(ResultCode::Success, "own")),
            5,
        );
        chain.merge(&other);

        assert_eq!(chain.len(), 2);
        let results = chain.authenticate_all().expect("chain runs");
        assert_eq!(results[0].messages(), ["merged-high"]);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let mut chain = armed_chain();
        chain.attach(
            Box::new(StubAdapter::with_message(ResultCode::Success, "shared")),
            1,
        );

        let mut cloned = chain.clone();
        cloned.attach(
            Box::new(StubAdapter::with_message(ResultCode::Success, "clone-only")),
            2,
        );

        assert_eq!(chain.len(), 1);
        assert_eq!(cloned.len(), 2);

        // Running the clone does not fill the original's results.
        cloned.authenticate_all().expect("chain runs");
        assert!(chain.results().is_empty());
    }

    #[test]
    fn logout_runs_every_adapter_unconditionally() {
        let mut chain = armed_chain();
        let (first, first_calls) = StubAdapter::new(ResultCode::Failure);
        let (second, second_calls) = StubAdapter::new(ResultCode::Failure);
        chain
            .attach(Box::new(first), 2)
            .attach(Box::new(second), 1);

        let results = chain.logout_all();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.code() == ResultCode::Logout));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn logout_on_empty_chain_synthesizes_a_result() {
        let mut chain = AdapterChain::new();
        let results = chain.logout_all();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), ResultCode::Logout);
        assert_eq!(results[0].messages(), ["Logout success."]);
    }

    #[test]
    fn messages_after_first_failure_are_the_failures_only() {
        let mut chain = armed_chain();
        chain
            .attach(
                Box::new(StubAdapter::with_message(
                    ResultCode::CredentialInvalid,
                    "bad credential",
                )),
                2,
            )
            .attach(
                Box::new(StubAdapter::with_message(ResultCode::Success, "never seen")),
                1,
            );

        chain.authenticate_all().expect("chain runs");
        assert_eq!(chain.messages(), ["bad credential"]);
    }

    #[test]
    fn messages_merge_later_over_earlier_position_by_position() {
        struct TwoMessages;
        impl Adapter for TwoMessages {
            fn identity(&self) -> Option<&str> {
                Some("bob")
            }
            fn set_identity(&mut self, _: Option<String>) {}
            fn credential(&self) -> Option<&SecretString> {
                None
            }
            fn set_credential(&mut self, _: Option<SecretString>) {}
            fn options(&self) -> &AuthOptions {
                unimplemented!("not used by this test")
            }
            fn set_options(&mut self, _: AuthOptions) {}
            fn authenticate(&mut self) -> Result<AuthResult, AuthError> {
                Ok(AuthResult::new(
                    ResultCode::Failure,
                    None,
                    vec!["first".to_string(), "second".to_string()],
                ))
            }
            fn logout(&mut self) -> AuthResult {
                AuthResult::new(ResultCode::Logout, None, Vec::new())
            }
            fn boxed_clone(&self) -> Box<dyn Adapter> {
                Box::new(TwoMessages)
            }
        }

        let mut chain = armed_chain();
        chain
            .attach(Box::new(TwoMessages), 2)
            .attach(
                Box::new(StubAdapter::with_message(ResultCode::Failure, "override")),
                1,
            )
            .set_break_on_failure(false);

        chain.authenticate_all().expect("chain runs");
        assert_eq!(chain.messages(), ["override", "second"]);
    }

    #[test]
    fn trait_level_authenticate_folds_to_the_final_result() {
        let mut chain = armed_chain();
        let (first, _) = StubAdapter::new(ResultCode::Success);
        let (second, _) = StubAdapter::new(ResultCode::IdentityNotFound);
        chain
            .attach(Box::new(first), 2)
            .attach(Box::new(second), 1);

        let adapter: &mut dyn Adapter = &mut chain;
        let result = adapter.authenticate().expect("chain runs");
        assert_eq!(result.code(), ResultCode::IdentityNotFound);
    }

    #[test]
    fn set_identity_propagates_to_attached_adapters() {
        let (stub, _) = StubAdapter::new(ResultCode::Success);
        let mut chain = AdapterChain::new();
        chain.attach(Box::new(stub), 1);
        chain.set_identity(Some("bob".to_string()));
        chain.set_credential(Some(SecretString::from("secret".to_string())));

        let adapters = chain.adapters();
        assert_eq!(adapters[0].identity(), Some("bob"));
        assert!(adapters[0].credential().is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn outcome(valid: bool) -> ResultCode {
            if valid {
                ResultCode::Success
            } else {
                ResultCode::Failure
            }
        }

        proptest! {
            /// With break-on-failure, the results list is truncated at the
            /// first failure and later adapters never run; without it,
            /// every adapter runs exactly once.
            #[test]
            fn result_length_matches_break_policy(
                validity in proptest::collection::vec(any::<bool>(), 1..8),
                break_on_failure in any::<bool>(),
            ) {
                let mut chain = armed_chain();
                chain.set_break_on_failure(break_on_failure);
                let mut counters = Vec::new();
                // Descending priorities pin execution order to vec order.
                for (idx, valid) in validity.iter().enumerate() {
                    let (stub, calls) = StubAdapter::new(outcome(*valid));
                    chain.attach(Box::new(stub), -(idx as i32));
                    counters.push(calls);
                }

                let expected_len = if break_on_failure {
                    validity
                        .iter()
                        .position(|valid| !valid)
                        .map(|k| k + 1)
                        .unwrap_or(validity.len())
                } else {
                    validity.len()
                };

                let results_len = chain.authenticate_all().expect("chain runs").len();
                prop_assert_eq!(results_len, expected_len);

                for (idx, calls) in counters.iter().enumerate() {
                    let expected_calls = usize::from(idx < expected_len);
                    prop_assert_eq!(calls.load(Ordering::SeqCst), expected_calls);
                }
            }

            /// A prepended adapter always ends up with a strictly greater
            /// effective priority than every previously attached adapter.
            #[test]
            fn prepended_adapter_always_runs_first(
                priorities in proptest::collection::vec(-1000i32..1000, 1..8),
            ) {
                let mut chain = armed_chain();
                for priority in &priorities {
                    chain.attach(
                        Box::new(StubAdapter::with_message(ResultCode::Success, "existing")),
                        *priority,
                    );
                }
                chain.prepend_adapter(Box::new(StubAdapter::with_message(
                    ResultCode::Success,
                    "prepended",
                )));

                let results = chain.authenticate_all().expect("chain runs");
                prop_assert_eq!(results[0].messages()[0].as_str(), "prepended");
            }
        }
    }
}
