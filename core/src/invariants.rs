#![allow(dead_code)]

use std::collections::HashSet;

use crate::{App, KvStore, Ledger};

/// INV-1: a derived balance is never negative.
pub fn assert_balance_non_negative(ledger: &Ledger, project_id: &str) {
    let balance = ledger.balance_for(project_id);
    assert!(
        balance >= 0,
        "INV-1 violated: project {} has negative balance ({})",
        project_id,
        balance
    );
}

/// INV-2: the catalog's cached `collected` agrees with the ledger fold
/// for every project.
pub fn assert_catalog_matches_ledger<S: KvStore>(app: &App<S>) {
    for project in app.catalog().projects() {
        assert_eq!(
            project.collected,
            app.ledger().balance_for(&project.id),
            "INV-2 violated: project {} cache drifted from ledger fold",
            project.id
        );
    }
}

/// INV-3: replay is idempotent; folding twice yields the same balance.
pub fn assert_replay_idempotent(ledger: &Ledger, project_id: &str) {
    assert_eq!(
        ledger.balance_for(project_id),
        ledger.balance_for(project_id),
        "INV-3 violated: repeated folds disagree for project {}",
        project_id
    );
}

/// INV-4: entry identifiers are unique across the log.
pub fn assert_unique_ids(ledger: &Ledger) {
    let mut seen = HashSet::new();
    for entry in ledger.entries() {
        assert!(
            seen.insert(entry.id.as_str()),
            "INV-4 violated: duplicate transaction id {}",
            entry.id
        );
    }
}

/// INV-5: append invariant — after an `add` of `amount`, the balance
/// increases by exactly `amount`.
pub fn assert_add_invariant(balance_before: i64, balance_after: i64, amount: i64) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-5 violated: add invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// Run the stateful invariants over the whole session.
pub fn assert_all_session_invariants<S: KvStore>(app: &App<S>) {
    assert_catalog_matches_ledger(app);
    assert_unique_ids(app.ledger());
    for project in app.catalog().projects() {
        assert_balance_non_negative(app.ledger(), &project.id);
        assert_replay_idempotent(app.ledger(), &project.id);
    }
}
