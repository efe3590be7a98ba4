//! # Pledges Core
//!
//! Ledger and authorization core of the municipal project-funding showcase.
//! The showcase lists public infrastructure projects, records visitor
//! pledges of support, and lets an authenticated administrator adjust
//! recorded totals. Rendering and navigation live elsewhere; this crate
//! owns the state that must stay consistent:
//!
//! | Concern                  | Module      | Entry points                            |
//! |--------------------------|-------------|-----------------------------------------|
//! | Session wiring           | [`app`]     | [`App::init`], [`App::record_pledge`], [`App::adjust_collected`] |
//! | Access control           | [`auth`]    | [`Gate::login`], [`Gate::logout`], [`Gate::is_authorized_for`] |
//! | Transaction ledger       | [`ledger`]  | [`Ledger::append`], [`Ledger::balance_for`], [`Ledger::entries_for`] |
//! | Project catalog          | [`catalog`] | [`Catalog::restore`], [`Catalog::apply`] |
//! | Persistence boundary     | [`store`]   | [`KvStore`], [`MemoryStore`]            |
//!
//! ## Architecture
//!
//! A project's displayed `collected` amount is always the fold of an
//! append-only list of signed add/remove ledger entries, clamped at zero.
//! The catalog keeps `collected` as a denormalized cache of that fold and
//! the two are updated together on every append, so incremental update and
//! full replay always agree.
//!
//! All session state lives in an explicit [`App`] context created by
//! [`App::init`], which restores the gate, ledger, and catalog from a
//! [`KvStore`]. There are no globals and no implicit teardown. The store
//! holds three independent JSON blobs; a malformed blob is cleared and
//! replaced by defaults at restore time, never surfaced as a failure.
//!
//! Credential verification is injected through [`CredentialVerifier`] so
//! the admin pair lives at a trusted boundary (operator configuration),
//! not compiled into the library.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod errors;
pub mod ledger;
pub mod store;
pub mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_auth;
#[cfg(test)]
mod test_replay;

pub use app::App;
pub use auth::{CredentialVerifier, Gate, PrivilegedAction, StaticCredentials};
pub use catalog::Catalog;
pub use errors::{AppError, LedgerError, StoreError};
pub use ledger::{Ledger, LedgerSummary};
pub use store::{KvStore, MemoryStore};
pub use types::{
    AdminCredentials, Amount, AuthState, NewTransaction, Project, Transaction, TransactionKind,
};
