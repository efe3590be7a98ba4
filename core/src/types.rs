//! # Types
//!
//! Shared data structures used across the showcase core.
//!
//! ## Design decisions
//!
//! ### Typed transaction kinds
//!
//! A transaction's kind-specific fields (supporter details for an addition,
//! a reason for a removal) are carried by [`TransactionKind`], an
//! internally-tagged enum, so "required for this type" is enforced by the
//! type system rather than by optional fields checked at runtime. The
//! serialized shape stays flat and camelCase:
//!
//! ```json
//! {"id":"txn-…","projectId":"museu-historia","date":"…","amount":1000,
//!  "type":"add","supporter":"Dep. X","governmentSphere":"federal","department":"MEC"}
//! ```
//!
//! ### Amounts
//!
//! Monetary values are `i64` whole currency units. Release builds keep
//! `overflow-checks = true` so arithmetic on them never wraps silently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monetary amount in whole currency units (BRL).
pub type Amount = i64;

/// A public infrastructure project on the showcase.
///
/// `collected` is a denormalized cache of the ledger fold for this id; it
/// is mutated only through [`crate::Catalog::apply`]. All other fields are
/// fixed at catalog definition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable unique identifier, assigned at catalog definition time.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display asset path; opaque to this crate.
    pub image: String,
    /// Funding goal, positive.
    pub target: Amount,
    /// Cached ledger fold, never negative.
    pub collected: Amount,
}

/// Kind-specific payload of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionKind {
    /// A pledge of support; adds to the project balance.
    #[serde(rename = "add", rename_all = "camelCase")]
    Add {
        supporter: String,
        government_sphere: String,
        department: String,
    },
    /// An administrative adjustment; subtracts from the project balance.
    #[serde(rename = "remove")]
    Remove { reason: String },
}

impl TransactionKind {
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add { .. })
    }
}

/// An immutable, appended ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Generated at append time; unique within the process lifetime.
    pub id: String,
    /// Foreign reference to [`Project::id`]; existence is not enforced,
    /// orphaned references are tolerated.
    pub project_id: String,
    /// Wall-clock timestamp of the append.
    pub date: DateTime<Utc>,
    /// Positive monetary value.
    pub amount: Amount,
    #[serde(flatten)]
    pub kind: TransactionKind,
}

/// A ledger entry as submitted by the caller, before `id` and `date` are
/// stamped by [`crate::Ledger::append`].
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub project_id: String,
    pub amount: Amount,
    pub kind: TransactionKind,
}

/// Persisted session authorization state.
///
/// There is exactly one privilege level, so `is_admin` always equals
/// `is_authenticated`; both are kept for compatibility with the persisted
/// `auth-state` blob shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_admin: bool,
}

/// A username/password pair presented at login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}
