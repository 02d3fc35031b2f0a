use std::sync::Arc;

use chemlab_engine::{
    Catalogue, DiscoveryLedger, LabCore, LedgerConfig, MemoryStore, MixOutcome, ReactionTable,
};

#[test]
fn progress_round_trips_through_the_store() {
    let store = MemoryStore::new();

    let mut lab = LabCore::with_store(Box::new(store.clone()));
    let total = lab.total_reactions();
    lab.add_ingredient("steelwool");
    lab.add_ingredient("battery");
    lab.add_ingredient("yeast");
    lab.add_ingredient("peroxide");
    assert_eq!(lab.unlocked_count(), 2);
    drop(lab);

    let lab = LabCore::with_store(Box::new(store.clone()));
    assert_eq!(lab.unlocked_count(), 2);
    assert_eq!(lab.completion_fraction(), 2.0 / total as f32);

    let names: Vec<_> = lab
        .ledger()
        .discoveries()
        .iter()
        .map(|d| d.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Burning Steel Wool", "Elephant Toothpaste"]);
}

#[test]
fn whole_starter_catalogue_completes_exactly_once() {
    let store = MemoryStore::new();
    let catalogue = Catalogue::starter();
    let table = Arc::new(ReactionTable::from_catalogue(&catalogue));
    let mut ledger = DiscoveryLedger::open(Arc::clone(&table), Box::new(store), LedgerConfig::default());

    let mut signals = 0;
    for _ in 0..2 {
        for def in catalogue.reactions() {
            ledger.register_and_report_new(def);
            if ledger.take_completion_signal() {
                signals += 1;
            }
        }
    }
    assert_eq!(signals, 1);
    assert!(ledger.is_fully_complete());
    assert_eq!(ledger.progress_label(), "100%");
}

#[test]
fn garbage_in_the_slot_starts_fresh() {
    let store = MemoryStore::new();
    store.set("lab.recipes", "[1, 2, 3]");

    let mut lab = LabCore::with_store(Box::new(store.clone()));
    assert_eq!(lab.unlocked_count(), 0);

    lab.add_ingredient("vinegar");
    assert!(matches!(
        lab.add_ingredient("bakingsoda"),
        MixOutcome::Reacted { newly_discovered: true, .. }
    ));
    assert_eq!(
        store.get("lab.recipes").as_deref(),
        Some(r#"{"keys":["bakingsoda+vinegar"]}"#)
    );
}
