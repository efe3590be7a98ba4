//! Session/auth gate.
//!
//! Two states, `Anonymous` and `Admin`. Anonymous is initial; the only way
//! in is a successful [`Gate::login`], the only way out is
//! [`Gate::logout`]. There is no expiry transition — a persisted admin
//! session stays valid until an explicit logout.
//!
//! The gate never holds a compiled-in credential pair. It delegates the
//! comparison to an injected [`CredentialVerifier`], so the actual pair
//! lives at a trusted boundary (operator configuration) the end user
//! cannot read out of the binary's logic.
//!
//! No rate limiting, lockout, or hashing exists here; the showcase has a
//! single operator-managed account and accepts that weakness.

use tracing::warn;

use crate::errors::StoreError;
use crate::store::{self, KvStore, AUTH_STATE_KEY};
use crate::types::{AdminCredentials, AuthState};

/// Decides whether a presented credential pair belongs to the
/// administrator.
pub trait CredentialVerifier {
    fn verify(&self, credentials: &AdminCredentials) -> bool;
}

/// Verifier backed by a single operator-supplied username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &AdminCredentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}

/// The privileged action classes of the showcase. There is exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegedAction {
    /// Appending a `remove` entry to a project's ledger.
    AdjustCollected,
}

/// Holds the session's [`AuthState`] and gates privileged actions on it.
pub struct Gate {
    state: AuthState,
    verifier: Box<dyn CredentialVerifier>,
}

impl Gate {
    /// Restore the persisted session state, once, at session start.
    ///
    /// A malformed `auth-state` blob is cleared and treated as absent;
    /// this never fails and never propagates a parse error.
    pub fn restore<S: KvStore>(store: &mut S, verifier: Box<dyn CredentialVerifier>) -> Self {
        let state = match store::read_json(store, AUTH_STATE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => AuthState::default(),
            Err(err) => {
                warn!(%err, "discarding corrupt auth state");
                store.remove(AUTH_STATE_KEY);
                AuthState::default()
            }
        };
        Self { state, verifier }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Exact-match comparison against the injected verifier. Pure; no
    /// state change.
    pub fn check_credentials(&self, credentials: &AdminCredentials) -> bool {
        self.verifier.verify(credentials)
    }

    /// Attempt to enter the Admin state.
    ///
    /// On a match the new state is persisted first, then committed in
    /// memory, and `Ok(true)` is returned. On a mismatch nothing is
    /// touched and `Ok(false)` is returned — invalid credentials are a
    /// value, not an error. The store is written only on success.
    pub fn login<S: KvStore>(
        &mut self,
        store: &mut S,
        credentials: &AdminCredentials,
    ) -> Result<bool, StoreError> {
        if !self.check_credentials(credentials) {
            return Ok(false);
        }
        let state = AuthState {
            is_authenticated: true,
            is_admin: true,
        };
        store::write_json(store, AUTH_STATE_KEY, &state)?;
        self.state = state;
        Ok(true)
    }

    /// Return to Anonymous and clear the persisted entry. Unconditional
    /// and idempotent.
    pub fn logout<S: KvStore>(&mut self, store: &mut S) {
        self.state = AuthState::default();
        store.remove(AUTH_STATE_KEY);
    }

    /// Every privileged action requires the Admin state.
    pub fn is_authorized_for(&self, _action: PrivilegedAction) -> bool {
        self.state.is_admin
    }
}
