//! Explicit session context.
//!
//! The original kept the auth flag, transaction log, and project list as
//! ad hoc process-wide state. Here everything lives in one [`App`] value:
//! it owns the store, restores every component in [`App::init`], and is
//! the only place the ledger and catalog are mutated together. There is no
//! implicit teardown; dropping the `App` ends the session.

use crate::auth::{CredentialVerifier, Gate, PrivilegedAction};
use crate::catalog::Catalog;
use crate::errors::{AppError, StoreError};
use crate::ledger::Ledger;
use crate::store::KvStore;
use crate::types::{AdminCredentials, Amount, AuthState, NewTransaction, Transaction, TransactionKind};

pub struct App<S: KvStore> {
    store: S,
    gate: Gate,
    ledger: Ledger,
    catalog: Catalog,
}

impl<S: KvStore> App<S> {
    /// Restore the gate, ledger, and catalog from the store. This is the
    /// only initialization path; corrupt blobs are cleared and replaced by
    /// defaults, so `init` cannot fail.
    pub fn init(mut store: S, verifier: Box<dyn CredentialVerifier>) -> Self {
        let gate = Gate::restore(&mut store, verifier);
        let ledger = Ledger::restore(&mut store);
        let mut catalog = Catalog::restore(&mut store);
        // The snapshot can lag the log when a previous session's catalog
        // write failed; the fold is the source of truth.
        catalog.reconcile(&ledger);
        Self {
            store,
            gate,
            ledger,
            catalog,
        }
    }

    // ─── Gate ─────────────────────────────────────────────

    pub fn login(&mut self, credentials: &AdminCredentials) -> Result<bool, StoreError> {
        self.gate.login(&mut self.store, credentials)
    }

    pub fn logout(&mut self) {
        self.gate.logout(&mut self.store);
    }

    pub fn auth(&self) -> AuthState {
        self.gate.state()
    }

    // ─── Ledger operations ────────────────────────────────

    /// Record a visitor pledge of support. Unprivileged.
    pub fn record_pledge(
        &mut self,
        project_id: &str,
        amount: Amount,
        supporter: &str,
        government_sphere: &str,
        department: &str,
    ) -> Result<Transaction, AppError> {
        let entry = NewTransaction {
            project_id: project_id.to_string(),
            amount,
            kind: TransactionKind::Add {
                supporter: supporter.to_string(),
                government_sphere: government_sphere.to_string(),
                department: department.to_string(),
            },
        };
        self.append(entry)
    }

    /// Remove part of a project's collected amount. Requires the Admin
    /// state; refused with [`AppError::NotAuthorized`] otherwise.
    pub fn adjust_collected(
        &mut self,
        project_id: &str,
        amount: Amount,
        reason: &str,
    ) -> Result<Transaction, AppError> {
        if !self.gate.is_authorized_for(PrivilegedAction::AdjustCollected) {
            return Err(AppError::NotAuthorized);
        }
        let entry = NewTransaction {
            project_id: project_id.to_string(),
            amount,
            kind: TransactionKind::Remove {
                reason: reason.to_string(),
            },
        };
        self.append(entry)
    }

    /// Append to the ledger, then sync the catalog's cached balance.
    fn append(&mut self, entry: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = self.ledger.append(&mut self.store, entry)?;
        if let Err(err) = self.catalog.apply(&mut self.store, &transaction) {
            // The entry is already committed to the log, so the cache
            // must follow the fold even though the snapshot write
            // failed; the error still surfaces to the caller.
            self.catalog.reconcile(&self.ledger);
            return Err(err.into());
        }
        Ok(transaction)
    }

    // ─── Read access ──────────────────────────────────────

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// End the session and hand the substrate back to the caller.
    pub fn into_store(self) -> S {
        self.store
    }
}
