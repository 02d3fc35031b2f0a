//! Browser tests: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use chemlab_engine::{Lab, MixStatus};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn lab_mixes_and_persists_to_local_storage() {
    let mut lab = Lab::with_storage_slot("test.recipes.mix".to_string());
    lab.clear_progress();

    lab.add_ingredient("bleach");
    let result = lab.add_ingredient("ammonia");
    assert_eq!(result.status(), MixStatus::Reacted);
    assert!(result.newly_discovered());
    assert_eq!(result.badges().length(), 1);

    let reopened = Lab::with_storage_slot("test.recipes.mix".to_string());
    assert_eq!(reopened.unlocked_count(), 1);
    assert_eq!(reopened.discovered_keys().length(), 1);
}

#[wasm_bindgen_test]
fn bad_bundle_is_a_js_error() {
    let mut lab = Lab::with_storage_slot("test.recipes.bundle".to_string());
    assert!(lab.load_catalogue_bundle("{ nope".to_string()).is_err());
    assert!(lab.total_reactions() > 0);
}
