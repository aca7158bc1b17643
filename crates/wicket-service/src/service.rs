// SPDX-FileCopyrightText: 2026 Wicket Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The orchestration facade tying adapters, listeners, and storage together.

use secrecy::SecretString;
use tracing::debug;

use wicket_core::{
    Adapter, AuthError, AuthResult, IdentityRef, RequestRef, ResponseRef, Storage,
};

use crate::event::{AuthEvent, Stage};
use crate::listener::{Listener, Reaction, Registration};

/// Orchestrates authentication: runs the configured adapter, dispatches the
/// staged listener pipeline over the outcome, and persists the winning
/// identity in storage.
///
/// The service owns its storage and an optional default adapter. Every call
/// builds a fresh [`AuthEvent`], so no state leaks between attempts.
pub struct AuthenticationService {
    adapter: Option<Box<dyn Adapter>>,
    storage: Box<dyn Storage>,
    listeners: Vec<Registration>,
    request: Option<RequestRef>,
}

impl AuthenticationService {
    /// Creates a service persisting identities in the given storage. No
    /// default adapter is configured; set one with
    /// [`set_adapter`](Self::set_adapter) or pass one per call.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            adapter: None,
            storage,
            listeners: Vec::new(),
            request: None,
        }
    }

    /// Installs the default adapter used by [`authenticate`](Self::authenticate)
    /// and [`sign`](Self::sign).
    pub fn set_adapter(&mut self, adapter: Box<dyn Adapter>) -> &mut Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn adapter(&self) -> Option<&dyn Adapter> {
        self.adapter.as_deref()
    }

    /// Attaches the transport request carried on every event this service
    /// builds, for listeners that need it.
    pub fn set_request(&mut self, request: RequestRef) -> &mut Self {
        self.request = Some(request);
        self
    }

    /// Subscribes a listener to a stage. Dispatch within a stage is by
    /// descending priority; equal priorities run in subscription order.
    pub fn listen(&mut self, stage: Stage, priority: i32, listener: Box<dyn Listener>) -> &mut Self {
        self.listeners.push(Registration {
            stage,
            priority,
            listener,
        });
        self
    }

    /// Authenticates with the default adapter.
    pub fn authenticate(&mut self) -> Result<AuthResult, AuthError> {
        let mut adapter = self.take_adapter()?;
        let outcome = self.authenticate_with(adapter.as_mut());
        self.adapter = Some(adapter);
        outcome
    }

    /// Authenticates with an explicitly supplied adapter, leaving the
    /// default adapter untouched.
    pub fn authenticate_with(&mut self, adapter: &mut dyn Adapter) -> Result<AuthResult, AuthError> {
        // A previous identity never survives a new attempt.
        if !self.storage.is_empty()? {
            self.storage.clear()?;
        }

        let mut event = self.new_event();
        let result = adapter.authenticate()?;
        debug!(code = ?result.code(), "adapter produced a result");
        event.set_result(result);

        let result = self.trigger_stage(Stage::Auth, &mut event)?;
        if !result.is_valid() {
            debug!(code = ?result.code(), "authentication failed");
            return self.trigger_stage(Stage::AuthFailed, &mut event);
        }

        if let Some(identity) = result.identity() {
            self.storage.write(IdentityRef::clone(identity))?;
        }
        debug!("authentication succeeded, identity persisted");
        self.trigger_stage(Stage::AuthSuccess, &mut event)
    }

    /// Binds the username and password to the default adapter, then runs the
    /// full authenticate flow.
    pub fn sign(&mut self, username: &str, password: SecretString) -> Result<AuthResult, AuthError> {
        let mut adapter = self.take_adapter()?;
        let outcome = self.sign_with(adapter.as_mut(), username, password);
        self.adapter = Some(adapter);
        outcome
    }

    /// [`sign`](Self::sign) against an explicitly supplied adapter.
    pub fn sign_with(
        &mut self,
        adapter: &mut dyn Adapter,
        username: &str,
        password: SecretString,
    ) -> Result<AuthResult, AuthError> {
        adapter.set_identity(Some(username.to_string()));
        adapter.set_credential(Some(password));
        self.authenticate_with(adapter)
    }

    /// Logs out with the default adapter: clears the stored identity, has
    /// the adapter clear its bindings, and dispatches the logout stage.
    pub fn logout(&mut self) -> Result<AuthResult, AuthError> {
        let mut adapter = self.take_adapter()?;
        let outcome = self.logout_with(adapter.as_mut());
        self.adapter = Some(adapter);
        outcome
    }

    /// [`logout`](Self::logout) against an explicitly supplied adapter.
    pub fn logout_with(&mut self, adapter: &mut dyn Adapter) -> Result<AuthResult, AuthError> {
        let mut event = self.new_event();
        if let Some(identity) = self.storage.read()? {
            event.set_identity(Some(identity));
        }

        event.set_result(adapter.logout());
        self.storage.clear()?;
        debug!("stored identity cleared on logout");
        self.trigger_stage(Stage::AuthLogout, &mut event)
    }

    /// Whether an identity is currently persisted.
    pub fn has_identity(&mut self) -> Result<bool, AuthError> {
        Ok(!self.storage.is_empty()?)
    }

    /// The persisted identity, if any.
    pub fn identity(&mut self) -> Result<Option<IdentityRef>, AuthError> {
        if self.storage.is_empty()? {
            return Ok(None);
        }
        self.storage.read()
    }

    /// Forgets the persisted identity without running the logout pipeline.
    pub fn clear_identity(&mut self) -> Result<(), AuthError> {
        self.storage.clear()
    }

    fn take_adapter(&mut self) -> Result<Box<dyn Adapter>, AuthError> {
        self.adapter.take().ok_or_else(|| {
            AuthError::Setup(
                "an adapter must be set or passed prior to calling authenticate".to_string(),
            )
        })
    }

    fn new_event(&self) -> AuthEvent {
        let mut event = AuthEvent::new();
        if let Some(request) = &self.request {
            event.set_request(RequestRef::clone(request));
        }
        event
    }

    /// Dispatches one stage over the event and reconciles the outcome.
    ///
    /// Listeners run in descending priority, ties in subscription order.
    /// Returning a [`Reaction`] stops dispatch: `Resolve` replaces the
    /// result, `Respond` keeps the event's result and attaches the response
    /// to it as a side channel. A stage that ends with no result at all is
    /// a pipeline error, not a domain failure.
    fn trigger_stage(&self, stage: Stage, event: &mut AuthEvent) -> Result<AuthResult, AuthError> {
        event.set_stage(stage);

        let mut ordered: Vec<&Registration> = self
            .listeners
            .iter()
            .filter(|registration| registration.stage == stage)
            .collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        debug!(stage = %stage, listeners = ordered.len(), "dispatching stage");

        let mut resolved: Option<AuthResult> = None;
        let mut response: Option<ResponseRef> = None;
        for registration in ordered {
            match registration.listener.on_event(event) {
                None => {}
                Some(Reaction::Resolve(result)) => {
                    debug!(stage = %stage, "listener resolved the stage");
                    resolved = Some(result);
                    break;
                }
                Some(Reaction::Respond(transport)) => {
                    debug!(stage = %stage, "listener responded, stopping dispatch");
                    response = Some(transport);
                    break;
                }
            }
        }

        let mut result = match resolved {
            Some(result) => result,
            None => event.result().cloned().ok_or_else(|| {
                AuthError::Stopped(format!("stage '{stage}' finished with no result"))
            })?,
        };
        if let Some(transport) = response {
            result.attach_response(transport);
        }
        event.set_result(result.clone());
        Ok(result)
    }
}
