//! Chemlab Engine - reaction matching and recipe-book progress, native + WASM
//!
//! Architecture:
//! - core/     - reaction keys, logging macros
//! - domain/   - ingredients, reaction definitions, content bundles
//! - systems/  - reaction table, discovery ledger, beaker
//! - storage/  - progress persistence (localStorage / memory)
//! - lab/      - orchestration + wasm-bindgen facade

// Logging macros must be defined before any module that uses them
#[macro_use]
pub mod core;
pub mod domain;
pub mod storage;
pub mod systems;
pub mod lab;

// Flat re-exports for the common paths
pub use crate::core::key::ReactionKey;
pub use domain::content::Catalogue;
pub use domain::ingredients::Ingredient;
pub use domain::reactions::{EffectType, ReactionBadge, ReactionDefinition, ReactionSummary};
pub use lab::{Lab, LabCore, MixResult, MixStatus};
pub use storage::{MemoryStore, ProgressStore};
pub use systems::discovery::{DiscoveryLedger, LedgerConfig};
pub use systems::mixing::{Beaker, MixOutcome};
pub use systems::reaction_table::ReactionTable;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    lab_log!("Chemlab engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
