//! Lab - one bench, one recipe book
//!
//! LabCore owns the catalogue, the reaction table, the discovery ledger and
//! the beaker, and wires them together explicitly:
//! - the store is injected into the ledger at construction
//! - the table and ledger are handed to the beaker on every mix
//!
//! `Lab` (facade.rs) is the wasm-bindgen surface over LabCore.

use std::sync::Arc;

use crate::core::key::ReactionKey;
use crate::domain::content::Catalogue;
use crate::domain::reactions::ReactionDefinition;
use crate::storage::ProgressStore;
use crate::systems::discovery::{DiscoveryLedger, LedgerConfig};
use crate::systems::mixing::{Beaker, MixOutcome};
use crate::systems::reaction_table::ReactionTable;

#[path = "book/recipe_book.rs"]
mod recipe_book;
mod facade;

pub use facade::{Lab, MixResult, MixStatus};

pub struct LabCore {
    catalogue: Catalogue,
    table: Arc<ReactionTable>,
    ledger: DiscoveryLedger,
    beaker: Beaker,
}

impl LabCore {
    /// Build the table from `catalogue` and restore progress from `store`
    pub fn new(catalogue: Catalogue, store: Box<dyn ProgressStore>, config: LedgerConfig) -> Self {
        let mut table = ReactionTable::from_catalogue(&catalogue);
        table.rebuild();
        let table = Arc::new(table);
        let ledger = DiscoveryLedger::open(Arc::clone(&table), store, config);
        lab_log!(
            "Lab ready: {} reactions, {} discovered",
            table.len(),
            ledger.unlocked_count()
        );
        Self {
            catalogue,
            table,
            ledger,
            beaker: Beaker::new(),
        }
    }

    /// Starter catalogue with the default storage slot
    pub fn with_store(store: Box<dyn ProgressStore>) -> Self {
        Self::new(Catalogue::starter(), store, LedgerConfig::default())
    }

    /// Replace the catalogue (authoring tool edit, content update).
    /// Progress is kept; the beaker is emptied.
    pub fn load_catalogue_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let catalogue = Catalogue::from_bundle_json(json)?;
        self.set_catalogue(catalogue);
        Ok(())
    }

    pub fn set_catalogue(&mut self, catalogue: Catalogue) {
        let mut table = ReactionTable::from_catalogue(&catalogue);
        table.rebuild();
        self.table = Arc::new(table);
        self.catalogue = catalogue;
        self.ledger.set_table(Arc::clone(&self.table));
        self.beaker.visual_reset();
    }

    pub fn add_ingredient(&mut self, ingredient_id: &str) -> MixOutcome {
        if !ingredient_id.is_empty() && self.catalogue.ingredient(ingredient_id).is_none() {
            lab_warn!("Lab: unknown ingredient dropped in beaker: {}", ingredient_id);
        }
        self.beaker
            .add_ingredient(ingredient_id, &self.table, &mut self.ledger)
    }

    /// Pair lookup without touching the beaker or the ledger
    pub fn resolve(&self, a: &str, b: &str) -> Option<&ReactionDefinition> {
        self.table.try_resolve(a, b)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn table(&self) -> &ReactionTable {
        &self.table
    }

    pub fn ledger(&self) -> &DiscoveryLedger {
        &self.ledger
    }

    pub fn beaker(&self) -> &Beaker {
        &self.beaker
    }

    pub fn combo(&self) -> u32 {
        self.beaker.combo()
    }

    pub fn total_reactions(&self) -> usize {
        self.table.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.ledger.unlocked_count()
    }

    pub fn completion_fraction(&self) -> f32 {
        self.ledger.completion_fraction()
    }

    pub fn is_fully_complete(&self) -> bool {
        self.ledger.is_fully_complete()
    }

    pub fn progress_label(&self) -> String {
        self.ledger.progress_label()
    }

    pub fn take_completion_signal(&mut self) -> bool {
        self.ledger.take_completion_signal()
    }

    pub fn remove_recipe(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        self.ledger.remove(&ReactionKey::from_raw(key))
    }

    pub fn clear_progress(&mut self) {
        self.ledger.clear_progress();
    }

    pub fn visual_reset(&mut self) {
        self.beaker.visual_reset();
    }

    pub fn reset_combo(&mut self) {
        self.beaker.reset_combo();
    }

    pub fn clear_beaker(&mut self) {
        self.beaker.clear();
    }

    /// Unlocked recipes for the book panel, as JSON
    pub fn recipe_book_json(&self) -> String {
        recipe_book::recipe_book_json(&self.ledger)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
