//! Randomized append sequences, checked against the session invariants
//! and an independently computed expected balance per project.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::invariants;
use crate::{AdminCredentials, App, MemoryStore, StaticCredentials};

fn setup_admin() -> App<MemoryStore> {
    let mut app = App::init(
        MemoryStore::new(),
        Box::new(StaticCredentials::new("admin", "200817")),
    );
    let logged_in = app
        .login(&AdminCredentials {
            username: "admin".to_string(),
            password: "200817".to_string(),
        })
        .unwrap();
    assert!(logged_in);
    app
}

#[test]
fn test_random_sequences_keep_catalog_and_ledger_agreeing() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut app = setup_admin();

    let project_ids: Vec<String> = app
        .catalog()
        .projects()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let mut expected: HashMap<String, i64> =
        project_ids.iter().map(|id| (id.clone(), 0)).collect();

    for _ in 0..200 {
        let project_id = &project_ids[rng.gen_range(0..project_ids.len())];
        let balance = expected[project_id];

        // Roughly one adjustment for every three pledges, and only when
        // the balance can absorb it (the ledger refuses overdraws).
        if balance > 0 && rng.gen_range(0..4) == 0 {
            let amount = rng.gen_range(1..=balance);
            app.adjust_collected(project_id, amount, "ajuste")
                .unwrap();
            *expected.get_mut(project_id).unwrap() -= amount;
        } else {
            let amount = rng.gen_range(1..=50_000);
            app.record_pledge(project_id, amount, "Apoiador", "municipal", "SMF")
                .unwrap();
            *expected.get_mut(project_id).unwrap() += amount;
        }
    }

    for (project_id, balance) in &expected {
        assert_eq!(app.ledger().balance_for(project_id), *balance);
    }
    invariants::assert_all_session_invariants(&app);

    // A fresh session restored from the same store replays to the same
    // balances.
    let resumed = App::init(
        app.into_store(),
        Box::new(StaticCredentials::new("admin", "200817")),
    );
    for (project_id, balance) in &expected {
        assert_eq!(resumed.ledger().balance_for(project_id), *balance);
    }
    invariants::assert_all_session_invariants(&resumed);
}
