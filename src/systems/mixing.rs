//! Beaker - accumulates ingredients and evaluates pairs
//!
//! Nothing is evaluated until two ingredients are in. After evaluation the
//! beaker is emptied either way. The combo counter grows only on brand-new
//! discoveries and drops to zero on a failed mix.

use crate::domain::reactions::ReactionSummary;
use crate::systems::discovery::DiscoveryLedger;
use crate::systems::reaction_table::ReactionTable;

#[derive(Clone, Debug, PartialEq)]
pub enum MixOutcome {
    /// Fewer than two ingredients so far
    Pending,
    Reacted {
        summary: ReactionSummary,
        newly_discovered: bool,
        combo: u32,
    },
    /// No reaction for this pair; mixture discarded, combo broken
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct Beaker {
    contents: Vec<String>,
    combo: u32,
}

impl Beaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop an ingredient in. Empty ids are ignored.
    pub fn add_ingredient(
        &mut self,
        ingredient_id: &str,
        table: &ReactionTable,
        ledger: &mut DiscoveryLedger,
    ) -> MixOutcome {
        if ingredient_id.is_empty() {
            return MixOutcome::Pending;
        }

        self.contents.push(ingredient_id.to_string());
        if self.contents.len() < 2 {
            return MixOutcome::Pending;
        }

        let outcome = match table.try_resolve(&self.contents[0], &self.contents[1]) {
            Some(def) => {
                let newly_discovered = ledger.register_and_report_new(def);
                if newly_discovered {
                    self.combo += 1;
                }
                MixOutcome::Reacted {
                    summary: def.summary(),
                    newly_discovered,
                    combo: self.combo,
                }
            }
            None => {
                self.combo = 0;
                MixOutcome::Failed
            }
        };

        self.contents.clear();
        outcome
    }

    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Empty the beaker, keep the combo (Reset button)
    pub fn visual_reset(&mut self) {
        self.contents.clear();
    }

    /// Zero the combo only (Delete button)
    pub fn reset_combo(&mut self) {
        self.combo = 0;
    }

    /// Contents and combo
    pub fn clear(&mut self) {
        self.contents.clear();
        self.combo = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ingredients::Ingredient;
    use crate::domain::reactions::ReactionDefinition;
    use crate::storage::MemoryStore;
    use crate::systems::discovery::LedgerConfig;

    fn bench() -> (Arc<ReactionTable>, DiscoveryLedger) {
        let table = Arc::new(ReactionTable::new(vec![
            ReactionDefinition::between(
                "Fizzy Foam",
                Ingredient::new("vinegar", "Vinegar"),
                Ingredient::new("bakingsoda", "Baking Soda"),
            ),
            ReactionDefinition::between(
                "Toxic Gas",
                Ingredient::new("bleach", "Bleach"),
                Ingredient::new("ammonia", "Ammonia"),
            ),
        ]));
        let ledger = DiscoveryLedger::open(
            Arc::clone(&table),
            Box::new(MemoryStore::new()),
            LedgerConfig::default(),
        );
        (table, ledger)
    }

    #[test]
    fn single_ingredient_is_pending() {
        let (table, mut ledger) = bench();
        let mut beaker = Beaker::new();
        assert_eq!(beaker.add_ingredient("vinegar", &table, &mut ledger), MixOutcome::Pending);
        assert_eq!(beaker.contents(), &["vinegar".to_string()]);
        assert_eq!(ledger.unlocked_count(), 0);
    }

    #[test]
    fn empty_id_is_ignored() {
        let (table, mut ledger) = bench();
        let mut beaker = Beaker::new();
        assert_eq!(beaker.add_ingredient("", &table, &mut ledger), MixOutcome::Pending);
        assert!(beaker.contents().is_empty());
    }

    #[test]
    fn combo_counts_only_new_discoveries() {
        let (table, mut ledger) = bench();
        let mut beaker = Beaker::new();

        beaker.add_ingredient("bakingsoda", &table, &mut ledger);
        match beaker.add_ingredient("vinegar", &table, &mut ledger) {
            MixOutcome::Reacted { summary, newly_discovered, combo } => {
                assert_eq!(summary.title, "Fizzy Foam");
                assert_eq!(summary.ingredients_line.as_deref(), Some("Vinegar + Baking Soda"));
                assert!(newly_discovered);
                assert_eq!(combo, 1);
            }
            other => panic!("expected reaction, got {:?}", other),
        }
        assert!(beaker.contents().is_empty());

        beaker.add_ingredient("vinegar", &table, &mut ledger);
        match beaker.add_ingredient("bakingsoda", &table, &mut ledger) {
            MixOutcome::Reacted { newly_discovered, combo, .. } => {
                assert!(!newly_discovered);
                assert_eq!(combo, 1);
            }
            other => panic!("expected reaction, got {:?}", other),
        }

        beaker.add_ingredient("bleach", &table, &mut ledger);
        beaker.add_ingredient("ammonia", &table, &mut ledger);
        assert_eq!(beaker.combo(), 2);
        assert!(ledger.is_fully_complete());
    }

    #[test]
    fn failed_mix_breaks_combo_and_empties_beaker() {
        let (table, mut ledger) = bench();
        let mut beaker = Beaker::new();
        beaker.add_ingredient("bleach", &table, &mut ledger);
        beaker.add_ingredient("ammonia", &table, &mut ledger);
        assert_eq!(beaker.combo(), 1);

        beaker.add_ingredient("bleach", &table, &mut ledger);
        assert_eq!(beaker.add_ingredient("vinegar", &table, &mut ledger), MixOutcome::Failed);
        assert_eq!(beaker.combo(), 0);
        assert!(beaker.contents().is_empty());
        assert_eq!(ledger.unlocked_count(), 1);
    }

    #[test]
    fn resets() {
        let (table, mut ledger) = bench();
        let mut beaker = Beaker::new();
        beaker.add_ingredient("bleach", &table, &mut ledger);
        beaker.add_ingredient("ammonia", &table, &mut ledger);
        beaker.add_ingredient("vinegar", &table, &mut ledger);

        beaker.visual_reset();
        assert!(beaker.contents().is_empty());
        assert_eq!(beaker.combo(), 1);

        beaker.reset_combo();
        assert_eq!(beaker.combo(), 0);

        beaker.add_ingredient("vinegar", &table, &mut ledger);
        beaker.clear();
        assert!(beaker.contents().is_empty());
        assert_eq!(beaker.combo(), 0);
    }
}
