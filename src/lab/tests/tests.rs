use super::*;
use crate::domain::reactions::EffectType;
use crate::storage::MemoryStore;
use crate::systems::discovery::DEFAULT_STORAGE_SLOT;

const TWO_REACTIONS: &str = r#"{
    "ingredients": [
        { "id": "vinegar", "displayName": "Vinegar" },
        { "id": "bakingsoda", "displayName": "Baking Soda" },
        { "id": "bleach", "displayName": "Bleach" },
        { "id": "ammonia", "displayName": "Ammonia" }
    ],
    "reactions": [
        { "displayName": "Fizzy Foam", "ingredientA": "vinegar", "ingredientB": "bakingsoda", "effect": "bubbles" },
        { "displayName": "Toxic Gas", "ingredientA": "bleach", "ingredientB": "ammonia", "effect": "smoke",
          "badges": [{ "name": "Toxic" }], "funFact": "Do not try this at home." }
    ]
}"#;

fn two_reaction_lab(store: &MemoryStore) -> LabCore {
    let catalogue = Catalogue::from_bundle_json(TWO_REACTIONS).unwrap();
    LabCore::new(catalogue, Box::new(store.clone()), LedgerConfig::default())
}

#[test]
fn mixing_a_known_pair_unlocks_it() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);
    assert_eq!(lab.total_reactions(), 2);
    assert!(lab.table().is_built());

    assert_eq!(lab.add_ingredient("bakingsoda"), MixOutcome::Pending);
    match lab.add_ingredient("vinegar") {
        MixOutcome::Reacted { summary, newly_discovered, combo } => {
            assert_eq!(summary.title, "Fizzy Foam");
            assert!(newly_discovered);
            assert_eq!(combo, 1);
        }
        other => panic!("expected reaction, got {:?}", other),
    }

    assert_eq!(lab.completion_fraction(), 0.5);
    assert_eq!(lab.progress_label(), "50%");
    assert!(store.get(DEFAULT_STORAGE_SLOT).unwrap().contains("bakingsoda+vinegar"));
}

#[test]
fn full_completion_signals_once() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);

    lab.add_ingredient("vinegar");
    lab.add_ingredient("bakingsoda");
    assert!(!lab.take_completion_signal());

    lab.add_ingredient("ammonia");
    lab.add_ingredient("bleach");
    assert!(lab.is_fully_complete());
    assert!(lab.take_completion_signal());

    lab.add_ingredient("ammonia");
    lab.add_ingredient("bleach");
    assert!(!lab.take_completion_signal());
    assert_eq!(lab.combo(), 2);
}

#[test]
fn unknown_ingredient_fails_the_mix() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);
    lab.add_ingredient("vinegar");
    assert_eq!(lab.add_ingredient("unobtainium"), MixOutcome::Failed);
    assert_eq!(lab.unlocked_count(), 0);
}

#[test]
fn progress_survives_a_restart() {
    let store = MemoryStore::new();
    {
        let mut lab = two_reaction_lab(&store);
        lab.add_ingredient("bleach");
        lab.add_ingredient("ammonia");
    }

    let lab = two_reaction_lab(&store);
    assert_eq!(lab.unlocked_count(), 1);
    assert_eq!(lab.ledger().discoveries()[0].display_name, "Toxic Gas");
}

#[test]
fn recipe_book_json_lists_unlocked_recipes_by_name() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);
    lab.add_ingredient("bleach");
    lab.add_ingredient("ammonia");
    lab.add_ingredient("vinegar");
    lab.add_ingredient("bakingsoda");

    let book: serde_json::Value = serde_json::from_str(&lab.recipe_book_json()).unwrap();
    assert_eq!(book["formatVersion"], 1);
    assert_eq!(book["unlockedCount"], 2);
    assert_eq!(book["totalCount"], 2);
    assert_eq!(book["progressLabel"], "100%");
    assert_eq!(book["complete"], true);

    let recipes = book["recipes"].as_array().unwrap();
    assert_eq!(recipes[0]["name"], "Fizzy Foam");
    assert_eq!(recipes[0]["effect"], "bubbles");
    assert!(recipes[0].get("funFact").is_none());
    assert_eq!(recipes[1]["key"], "ammonia+bleach");
    assert_eq!(recipes[1]["ingredients"][0], "Bleach");
    assert_eq!(recipes[1]["badges"][0]["name"], "Toxic");
    assert_eq!(recipes[1]["funFact"], "Do not try this at home.");
}

#[test]
fn remove_and_clear_progress() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);
    lab.add_ingredient("bleach");
    lab.add_ingredient("ammonia");
    lab.add_ingredient("vinegar");
    lab.add_ingredient("bakingsoda");

    assert!(lab.remove_recipe("ammonia+bleach"));
    assert!(!lab.remove_recipe("ammonia+bleach"));
    assert!(!lab.remove_recipe(""));
    assert_eq!(lab.unlocked_count(), 1);

    lab.clear_progress();
    assert_eq!(lab.completion_fraction(), 0.0);
    assert_eq!(lab.progress_label(), "0%");
}

#[test]
fn reloading_catalogue_keeps_progress_and_empties_beaker() {
    let store = MemoryStore::new();
    let mut lab = with_starter(&store);
    lab.add_ingredient("water");
    lab.add_ingredient("salt");
    lab.add_ingredient("vinegar");
    assert_eq!(lab.beaker().contents().len(), 1);

    lab.load_catalogue_bundle_json(TWO_REACTIONS).unwrap();
    assert!(lab.beaker().contents().is_empty());
    assert_eq!(lab.total_reactions(), 2);
    // salt+water is stale in the new catalogue but stays unlocked
    assert_eq!(lab.unlocked_count(), 1);
    assert!(lab.ledger().discoveries().is_empty());
    assert!(lab.resolve("salt", "water").is_none());
}

#[test]
fn bad_catalogue_bundle_is_rejected_and_old_one_kept() {
    let store = MemoryStore::new();
    let mut lab = two_reaction_lab(&store);
    assert!(lab.load_catalogue_bundle_json("{}").is_err());
    assert_eq!(lab.total_reactions(), 2);
    assert!(lab.resolve("vinegar", "bakingsoda").is_some());
}

#[test]
fn facade_reports_mix_results() {
    let mut lab = Lab::new();
    let first = lab.add_ingredient("vinegar");
    assert_eq!(first.status(), MixStatus::Pending);

    let second = lab.add_ingredient("bakingsoda");
    assert_eq!(second.status(), MixStatus::Reacted);
    assert!(second.newly_discovered());
    assert_eq!(second.combo(), 1);
    assert_eq!(second.key(), "bakingsoda+vinegar");
    assert_eq!(second.title(), "Fizzy Foam");
    assert_eq!(second.effect(), EffectType::Bubbles);
    assert!(second.text().starts_with("Fizzy Foam\nVinegar (Acetic Acid) + Baking Soda"));

    lab.add_ingredient("vinegar");
    let failed = lab.add_ingredient("bleach");
    assert_eq!(failed.status(), MixStatus::Failed);
    assert_eq!(failed.combo(), 0);

    assert_eq!(lab.preview("ammonia", "bleach").as_deref(), Some("Chloramine Vapour"));
    assert_eq!(lab.preview("ammonia", "water"), None);
}

#[test]
fn facade_loads_catalogue_bundle() {
    let mut lab = Lab::new();
    let total = lab.total_reactions();
    // JsValue construction needs a JS host; only exercise the success path natively
    assert!(lab.load_catalogue_bundle(TWO_REACTIONS.to_string()).is_ok());
    assert_eq!(lab.total_reactions(), 2);
    assert!(total > 2);
}

fn with_starter(store: &MemoryStore) -> LabCore {
    LabCore::with_store(Box::new(store.clone()))
}
