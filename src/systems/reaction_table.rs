//! Reaction Table - O(1) lookup by unordered ingredient pair
//!
//! Index rules:
//! - key = sorted ids joined with `+`, so A+B and B+A hit the same slot
//! - fewer than two distinct ingredients: not indexable, skipped
//! - `available == false`: authoring switch, skipped
//! - duplicate key: first listed wins, later ones dropped with a warning
//!
//! The index is built lazily on first lookup, or eagerly via `build`.

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::core::key::ReactionKey;
use crate::domain::content::Catalogue;
use crate::domain::reactions::ReactionDefinition;

#[derive(Default)]
struct TableIndex {
    by_key: HashMap<ReactionKey, usize>,
    duplicates_dropped: usize,
}

#[derive(Default)]
pub struct ReactionTable {
    definitions: Vec<ReactionDefinition>,
    index: OnceCell<TableIndex>,
}

impl ReactionTable {
    /// Unbuilt table; the index is created on first use
    pub fn new(definitions: Vec<ReactionDefinition>) -> Self {
        Self {
            definitions,
            index: OnceCell::new(),
        }
    }

    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self::new(catalogue.reactions().to_vec())
    }

    /// Replace the definition list and index it now
    pub fn build(&mut self, definitions: Vec<ReactionDefinition>) {
        self.definitions = definitions;
        self.rebuild();
    }

    /// Re-index the current definition list
    pub fn rebuild(&mut self) {
        self.index = OnceCell::from(index_definitions(&self.definitions));
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Look up an unordered pair. Empty ids count as missing.
    pub fn try_resolve(&self, a: &str, b: &str) -> Option<&ReactionDefinition> {
        let key = ReactionKey::for_pair(Some(a), Some(b))?;
        self.get(&key)
    }

    pub fn get(&self, key: &ReactionKey) -> Option<&ReactionDefinition> {
        let idx = *self.index().by_key.get(key)?;
        self.definitions.get(idx)
    }

    pub fn contains_key(&self, key: &ReactionKey) -> bool {
        self.index().by_key.contains_key(key)
    }

    /// Indexed (deduplicated) definitions. Order is unspecified.
    pub fn all_definitions(&self) -> impl Iterator<Item = &ReactionDefinition> {
        self.index()
            .by_key
            .values()
            .filter_map(move |&idx| self.definitions.get(idx))
    }

    /// Number of indexed reactions (the completion denominator)
    pub fn len(&self) -> usize {
        self.index().by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.index().duplicates_dropped
    }

    fn index(&self) -> &TableIndex {
        self.index.get_or_init(|| index_definitions(&self.definitions))
    }
}

fn index_definitions(definitions: &[ReactionDefinition]) -> TableIndex {
    let mut index = TableIndex {
        by_key: HashMap::with_capacity(definitions.len()),
        duplicates_dropped: 0,
    };

    for (idx, def) in definitions.iter().enumerate() {
        if !def.available {
            continue;
        }
        let Some(key) = def.key() else {
            continue;
        };
        if key.is_self_pair() {
            continue;
        }
        if index.by_key.contains_key(&key) {
            lab_warn!(
                "ReactionTable: duplicate reaction ignored: {} (definition: {})",
                key,
                def.id
            );
            index.duplicates_dropped += 1;
            continue;
        }
        index.by_key.insert(key, idx);
    }

    index
}
