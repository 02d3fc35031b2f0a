use serde::Serialize;

use crate::domain::ingredients::{Color, Ingredient};
use crate::systems::discovery::DiscoveryLedger;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeBook<'a> {
    format_version: u32,
    progress: f32,
    progress_label: String,
    unlocked_count: usize,
    total_count: usize,
    complete: bool,
    recipes: Vec<RecipeBookEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeBookEntry<'a> {
    key: String,
    name: &'a str,
    display_name: &'a str,
    ingredients: Vec<&'a str>,
    color: Color,
    effect: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    badges: Vec<RecipeBookBadge<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fun_fact: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeBookBadge<'a> {
    name: &'a str,
    color: Color,
}

/// Recipe-book rows sorted by display name, plus the progress readout
pub(super) fn recipe_book_json(ledger: &DiscoveryLedger) -> String {
    let recipes = ledger
        .discoveries_by_name()
        .into_iter()
        .map(|def| RecipeBookEntry {
            key: def.key().map(|k| k.to_string()).unwrap_or_default(),
            name: def.nice_name(),
            display_name: &def.display_name,
            ingredients: def.inputs().map(Ingredient::label).collect(),
            color: def.result_color,
            effect: def.effect.as_str(),
            badges: def
                .badges
                .iter()
                .map(|b| RecipeBookBadge { name: &b.name, color: b.color })
                .collect(),
            fun_fact: def.fun_fact.as_deref(),
        })
        .collect();

    let out = RecipeBook {
        format_version: 1,
        progress: ledger.completion_fraction(),
        progress_label: ledger.progress_label(),
        unlocked_count: ledger.unlocked_count(),
        total_count: ledger.table().len(),
        complete: ledger.is_fully_complete(),
        recipes,
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}
