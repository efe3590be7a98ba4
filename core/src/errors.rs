//! Application-wide error types.

use thiserror::Error;

use crate::types::Amount;

/// Failures at the key-value store boundary.
///
/// `Decode` is recovered from at every restore site (the corrupt key is
/// cleared and defaults are used); `Write` and `Encode` surface to the
/// caller so the presentation layer can report them without the in-memory
/// state having been touched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store write failed for key `{key}`: {message}")]
    Write { key: String, message: String },

    #[error("malformed persisted state under key `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode state for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejections raised by [`crate::Ledger::append`].
///
/// The ledger is the enforcement point for entry validity; callers may
/// pre-check (e.g. to disable a button) but the ledger does not trust them.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    #[error("missing required field `{0}` for this entry type")]
    MissingField(&'static str),

    #[error("cannot remove {requested} from project `{project_id}`: only {available} collected")]
    ExceedsBalance {
        project_id: String,
        requested: Amount,
        available: Amount,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures surfaced by the [`crate::App`] operations.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("administrator privileges are required to adjust collected amounts")]
    NotAuthorized,

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
