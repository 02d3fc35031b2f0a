//! Discovery Ledger - the player's recipe book
//!
//! Per key: Locked -> Unlocked, one way. Only `remove` and `clear_progress`
//! lock keys again.
//!
//! - unlocked keys persist as `{"keys":[...]}` in one storage slot
//! - every successful mutation saves synchronously, then recomputes progress
//! - keys without a current definition (catalogue changed) stay unlocked and
//!   still count toward progress, but have no recipe-book entry
//! - reaching 100% raises a one-shot signal; only a load or `clear_progress`
//!   re-arms it

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::key::ReactionKey;
use crate::domain::reactions::ReactionDefinition;
use crate::storage::ProgressStore;
use crate::systems::reaction_table::ReactionTable;

pub const DEFAULT_STORAGE_SLOT: &str = "lab.recipes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Storage slot holding the unlocked keys
    pub storage_slot: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
        }
    }
}

/// Persisted form. No version field: the format is a flat key list.
#[derive(Serialize, Deserialize, Default)]
struct SavedProgress {
    #[serde(default)]
    keys: Vec<ReactionKey>,
}

pub struct DiscoveryLedger {
    table: Arc<ReactionTable>,
    store: Box<dyn ProgressStore>,
    config: LedgerConfig,

    unlocked: HashSet<ReactionKey>,
    /// Unlock order of `unlocked`, used for saving
    unlock_order: Vec<ReactionKey>,
    /// Definitions of unlocked keys, discovery order
    discoveries: Vec<ReactionDefinition>,

    completion: f32,
    celebrated: bool,
    completion_signal: bool,
}

impl DiscoveryLedger {
    /// Empty ledger; nothing is read from the store
    pub fn new(table: Arc<ReactionTable>, store: Box<dyn ProgressStore>, config: LedgerConfig) -> Self {
        Self {
            table,
            store,
            config,
            unlocked: HashSet::new(),
            unlock_order: Vec::new(),
            discoveries: Vec::new(),
            completion: 0.0,
            celebrated: false,
            completion_signal: false,
        }
    }

    /// Ledger restored from the store (startup path)
    pub fn open(table: Arc<ReactionTable>, store: Box<dyn ProgressStore>, config: LedgerConfig) -> Self {
        let mut ledger = Self::new(table, store, config);
        ledger.load();
        ledger
    }

    /// Register a successful reaction. `true` only the first time its key
    /// is seen; repeats change nothing and write nothing.
    pub fn register_and_report_new(&mut self, def: &ReactionDefinition) -> bool {
        let Some(key) = def.key() else {
            return false;
        };
        if !self.unlocked.insert(key.clone()) {
            return false;
        }

        self.unlock_order.push(key);
        self.discoveries.push(def.clone());
        self.save();
        self.recompute();
        true
    }

    /// Forget one discovery. Returns whether the key was unlocked.
    pub fn remove(&mut self, key: &ReactionKey) -> bool {
        if !self.unlocked.remove(key) {
            return false;
        }

        self.unlock_order.retain(|k| k != key);
        self.discoveries.retain(|d| d.key().as_ref() != Some(key));
        self.save();
        self.recompute();
        true
    }

    pub fn remove_definition(&mut self, def: &ReactionDefinition) -> bool {
        match def.key() {
            Some(key) => self.remove(&key),
            None => false,
        }
    }

    /// Lock everything again and re-arm the completion signal
    pub fn clear_progress(&mut self) {
        self.unlocked.clear();
        self.unlock_order.clear();
        self.discoveries.clear();
        self.celebrated = false;
        self.completion_signal = false;
        self.save();
        self.recompute();
    }

    /// Write the unlocked keys. A failed write is logged; in-memory state
    /// stays authoritative.
    pub fn save(&mut self) {
        let saved = SavedProgress {
            keys: self.unlock_order.clone(),
        };
        let json = match serde_json::to_string(&saved) {
            Ok(json) => json,
            Err(e) => {
                lab_warn!("DiscoveryLedger: could not encode progress: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.write(&self.config.storage_slot, &json) {
            lab_warn!("DiscoveryLedger: save failed: {}", e);
        }
    }

    /// Replace in-memory state with the stored keys. Missing or corrupt data
    /// means no progress yet.
    pub fn load(&mut self) {
        self.unlocked.clear();
        self.unlock_order.clear();
        self.discoveries.clear();
        self.celebrated = false;
        self.completion_signal = false;

        let saved = match self.store.read(&self.config.storage_slot) {
            None => SavedProgress::default(),
            Some(json) if json.trim().is_empty() => SavedProgress::default(),
            Some(json) => match serde_json::from_str::<SavedProgress>(&json) {
                Ok(saved) => saved,
                Err(e) => {
                    lab_warn!(
                        "DiscoveryLedger: ignoring unreadable save in {}: {}",
                        self.config.storage_slot,
                        e
                    );
                    SavedProgress::default()
                }
            },
        };

        for key in saved.keys {
            if !self.unlocked.insert(key.clone()) {
                continue;
            }
            if let Some(def) = self.table.get(&key) {
                self.discoveries.push(def.clone());
            }
            self.unlock_order.push(key);
        }

        self.recompute();
    }

    /// Swap in a rebuilt catalogue. Unlocked keys are kept and re-matched
    /// against the new definitions.
    pub fn set_table(&mut self, table: Arc<ReactionTable>) {
        self.table = table;
        self.discoveries = self
            .unlock_order
            .iter()
            .filter_map(|key| self.table.get(key).cloned())
            .collect();
        self.recompute();
    }

    pub fn table(&self) -> &Arc<ReactionTable> {
        &self.table
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn is_unlocked(&self, key: &ReactionKey) -> bool {
        self.unlocked.contains(key)
    }

    /// Includes stale keys
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlocked keys in discovery order, stale keys included
    pub fn unlocked_keys(&self) -> &[ReactionKey] {
        &self.unlock_order
    }

    /// Discovery order
    pub fn discoveries(&self) -> &[ReactionDefinition] {
        &self.discoveries
    }

    /// Recipe-book order: by display name
    pub fn discoveries_by_name(&self) -> Vec<&ReactionDefinition> {
        let mut sorted: Vec<&ReactionDefinition> = self.discoveries.iter().collect();
        sorted.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        sorted
    }

    /// 0.0..=1.0
    pub fn completion_fraction(&self) -> f32 {
        self.completion
    }

    pub fn is_fully_complete(&self) -> bool {
        !self.table.is_empty() && self.completion >= 1.0
    }

    /// "NN%"
    pub fn progress_label(&self) -> String {
        format!("{}%", (self.completion * 100.0).round() as u32)
    }

    /// Pending one-shot "100% complete" signal; cleared once taken
    pub fn take_completion_signal(&mut self) -> bool {
        std::mem::take(&mut self.completion_signal)
    }

    pub fn completion_signal_pending(&self) -> bool {
        self.completion_signal
    }

    fn recompute(&mut self) {
        let total = self.table.len();
        self.completion = if total == 0 {
            0.0
        } else {
            (self.unlocked.len() as f32 / total as f32).min(1.0)
        };

        if self.is_fully_complete() && !self.celebrated {
            self.celebrated = true;
            self.completion_signal = true;
            lab_log!("DiscoveryLedger: all {} reactions discovered", total);
        }
    }
}
