//! Append-only transaction ledger and balance derivation.
//!
//! The ledger is the single source of truth for every project's collected
//! amount: the balance is always the fold of the project's entries, adding
//! on `add`, subtracting on `remove`, with the running total clamped at
//! zero. Entries are immutable once appended; there is no edit and no
//! delete.
//!
//! The ledger is also the enforcement point for entry validity. Callers
//! may pre-check (the UI disables a removal button when the amount exceeds
//! the balance) but [`Ledger::append`] re-validates and rejects with a
//! named [`LedgerError`]; the clamp in the fold remains only as a
//! defensive fallback for persisted data that predates this rule.
//!
//! The full entry list is serialized and written to the store after every
//! successful append — a whole-list overwrite, acceptable for a single
//! writer, not safe for concurrent ones.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, warn};

use crate::errors::LedgerError;
use crate::store::{self, KvStore, TRANSACTIONS_KEY};
use crate::types::{Amount, NewTransaction, Transaction, TransactionKind};

/// Aggregate counts across the whole log, as the admin dashboard shows
/// them. `net_total` is the unclamped signed sum over all projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub additions: usize,
    pub removals: usize,
    pub net_total: Amount,
}

/// The append-only transaction log.
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Restore the persisted log; a malformed blob is cleared and treated
    /// as an empty log.
    pub fn restore<S: KvStore>(store: &mut S) -> Self {
        let entries = match store::read_json(store, TRANSACTIONS_KEY) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "discarding corrupt transaction log");
                store.remove(TRANSACTIONS_KEY);
                Vec::new()
            }
        };
        Self { entries }
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Validate, stamp `id` and `date`, persist, and store a new entry.
    ///
    /// The enlarged snapshot is written to the store before the in-memory
    /// list is touched, so a failed write cannot leave the two
    /// disagreeing. Returns the fully materialized entry.
    pub fn append<S: KvStore>(
        &mut self,
        store: &mut S,
        new: NewTransaction,
    ) -> Result<Transaction, LedgerError> {
        self.validate(&new)?;

        let transaction = Transaction {
            id: generate_id(),
            project_id: new.project_id,
            date: Utc::now(),
            amount: new.amount,
            kind: new.kind,
        };

        let mut snapshot: Vec<&Transaction> = self.entries.iter().collect();
        snapshot.push(&transaction);
        store::write_json(store, TRANSACTIONS_KEY, &snapshot)?;

        debug!(id = %transaction.id, project = %transaction.project_id, "appended ledger entry");
        self.entries.push(transaction.clone());
        Ok(transaction)
    }

    fn validate(&self, new: &NewTransaction) -> Result<(), LedgerError> {
        if new.amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(new.amount));
        }
        match &new.kind {
            TransactionKind::Add {
                supporter,
                government_sphere,
                department,
            } => {
                require_field("supporter", supporter)?;
                require_field("governmentSphere", government_sphere)?;
                require_field("department", department)?;
            }
            TransactionKind::Remove { reason } => {
                require_field("reason", reason)?;
                let available = self.balance_for(&new.project_id);
                if new.amount > available {
                    return Err(LedgerError::ExceedsBalance {
                        project_id: new.project_id.clone(),
                        requested: new.amount,
                        available,
                    });
                }
            }
        }
        Ok(())
    }

    /// Fold the project's entries into its balance, clamping the running
    /// total at zero. Replayable at any time; the catalog's `collected`
    /// field is a cache of this value.
    pub fn balance_for(&self, project_id: &str) -> Amount {
        self.entries
            .iter()
            .filter(|t| t.project_id == project_id)
            .fold(0, |balance, t| {
                let next = match t.kind {
                    TransactionKind::Add { .. } => balance + t.amount,
                    TransactionKind::Remove { .. } => balance - t.amount,
                };
                next.max(0)
            })
    }

    /// All entries for a project, in insertion order. Display ordering
    /// (date descending) is a presentation concern.
    pub fn entries_for(&self, project_id: &str) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.entries
            .iter()
            .fold(LedgerSummary::default(), |mut acc, t| {
                match t.kind {
                    TransactionKind::Add { .. } => {
                        acc.additions += 1;
                        acc.net_total += t.amount;
                    }
                    TransactionKind::Remove { .. } => {
                        acc.removals += 1;
                        acc.net_total -= t.amount;
                    }
                }
                acc
            })
    }
}

/// `txn-<millis>-<suffix>`: wall-clock milliseconds plus a random
/// alphanumeric suffix. Collision-free within a process lifetime with
/// overwhelming probability; not guaranteed unique under same-millisecond
/// batch appends if ever moved server-side.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect();
    format!("txn-{millis}-{suffix}")
}

fn require_field(name: &'static str, value: &str) -> Result<(), LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::MissingField(name));
    }
    Ok(())
}
