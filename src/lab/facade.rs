use wasm_bindgen::prelude::*;

use crate::domain::content::Catalogue;
use crate::domain::reactions::EffectType;
use crate::storage::default_store;
use crate::systems::discovery::LedgerConfig;
use crate::systems::mixing::MixOutcome;

use super::LabCore;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixStatus {
    Pending = 0,
    Reacted = 1,
    Failed = 2,
}

/// Result of dropping one ingredient in the beaker
#[wasm_bindgen]
#[derive(Clone)]
pub struct MixResult {
    status: MixStatus,
    newly_discovered: bool,
    combo: u32,
    key: String,
    title: String,
    text: String,
    color: u32,
    effect: EffectType,
    badges: Vec<String>,
}

impl MixResult {
    fn from_outcome(outcome: MixOutcome, combo_now: u32) -> Self {
        let mut result = MixResult {
            status: MixStatus::Pending,
            newly_discovered: false,
            combo: combo_now,
            key: String::new(),
            title: String::new(),
            text: String::new(),
            color: 0,
            effect: EffectType::ColorChange,
            badges: Vec::new(),
        };
        match outcome {
            MixOutcome::Pending => {}
            MixOutcome::Failed => result.status = MixStatus::Failed,
            MixOutcome::Reacted { summary, newly_discovered, combo } => {
                result.status = MixStatus::Reacted;
                result.newly_discovered = newly_discovered;
                result.combo = combo;
                result.key = summary.key.as_ref().map(|k| k.to_string()).unwrap_or_default();
                result.text = summary.text();
                result.title = summary.title;
                result.color = summary.color;
                result.effect = summary.effect;
                result.badges = summary.badges.into_iter().map(|b| b.name).collect();
            }
        }
        result
    }
}

#[wasm_bindgen]
impl MixResult {
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> MixStatus { self.status }
    #[wasm_bindgen(getter)]
    pub fn newly_discovered(&self) -> bool { self.newly_discovered }
    #[wasm_bindgen(getter)]
    pub fn combo(&self) -> u32 { self.combo }
    #[wasm_bindgen(getter)]
    pub fn key(&self) -> String { self.key.clone() }
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String { self.title.clone() }
    /// Result panel text: name, ingredients, fun fact (newline separated)
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String { self.text.clone() }
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 { self.color }
    #[wasm_bindgen(getter)]
    pub fn effect(&self) -> EffectType { self.effect }

    /// Badge names as a JS array of strings
    pub fn badges(&self) -> js_sys::Array {
        self.badges.iter().map(|b| JsValue::from_str(b)).collect()
    }
}

#[wasm_bindgen]
pub struct Lab {
    core: LabCore,
}

#[wasm_bindgen]
impl Lab {
    /// Starter catalogue, progress restored from the platform store
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: LabCore::new(Catalogue::starter(), default_store(), LedgerConfig::default()),
        }
    }

    /// Same as `new` but saving under a custom storage slot (profiles)
    #[wasm_bindgen(js_name = withStorageSlot)]
    pub fn with_storage_slot(slot: String) -> Self {
        let config = LedgerConfig { storage_slot: slot };
        Self {
            core: LabCore::new(Catalogue::starter(), default_store(), config),
        }
    }

    pub fn load_catalogue_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_catalogue_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Drop an ingredient in the beaker
    pub fn add_ingredient(&mut self, ingredient_id: &str) -> MixResult {
        let outcome = self.core.add_ingredient(ingredient_id);
        MixResult::from_outcome(outcome, self.core.combo())
    }

    /// Name of the reaction for a pair, without mixing anything
    pub fn preview(&self, a: &str, b: &str) -> Option<String> {
        self.core.resolve(a, b).map(|def| def.nice_name().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn combo(&self) -> u32 { self.core.combo() }

    #[wasm_bindgen(getter)]
    pub fn total_reactions(&self) -> u32 { self.core.total_reactions() as u32 }

    #[wasm_bindgen(getter)]
    pub fn unlocked_count(&self) -> u32 { self.core.unlocked_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn completion_fraction(&self) -> f32 { self.core.completion_fraction() }

    #[wasm_bindgen(getter)]
    pub fn progress_label(&self) -> String { self.core.progress_label() }

    #[wasm_bindgen(getter)]
    pub fn is_fully_complete(&self) -> bool { self.core.is_fully_complete() }

    /// True once per completion; the UI plays the celebration when it sees it
    pub fn take_completion_signal(&mut self) -> bool {
        self.core.take_completion_signal()
    }

    /// Unlocked keys in discovery order
    pub fn discovered_keys(&self) -> js_sys::Array {
        self.core
            .ledger()
            .unlocked_keys()
            .iter()
            .map(|k| JsValue::from_str(k.as_str()))
            .collect()
    }

    pub fn recipe_book_json(&self) -> String {
        self.core.recipe_book_json()
    }

    pub fn remove_recipe(&mut self, key: &str) -> bool {
        self.core.remove_recipe(key)
    }

    pub fn clear_progress(&mut self) {
        self.core.clear_progress();
    }

    /// Empty the beaker but keep the combo
    pub fn visual_reset(&mut self) {
        self.core.visual_reset();
    }

    pub fn reset_combo(&mut self) {
        self.core.reset_combo();
    }

    pub fn clear_beaker(&mut self) {
        self.core.clear_beaker();
    }
}

impl Default for Lab {
    fn default() -> Self {
        Self::new()
    }
}
