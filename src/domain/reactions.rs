//! Reaction Definitions - one catalogue entry per ingredient pair
//!
//! Discovery state is NOT stored here. Whether the player has found a
//! reaction is owned by `DiscoveryLedger`; `available` only says whether the
//! reaction exists in play at all.

use wasm_bindgen::prelude::*;

use crate::core::key::ReactionKey;
use crate::domain::ingredients::{Color, Ingredient, COLOR_WHITE};

/// Effect the beaker plays on success. `ColorChange` just tints the liquid.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectType {
    ColorChange = 0,
    Bubbles = 1,
    Smoke = 2,
    Sparks = 3,
    Heat = 4,
}

impl Default for EffectType {
    fn default() -> Self {
        EffectType::ColorChange
    }
}

impl EffectType {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectType::ColorChange => "color_change",
            EffectType::Bubbles => "bubbles",
            EffectType::Smoke => "smoke",
            EffectType::Sparks => "sparks",
            EffectType::Heat => "heat",
        }
    }
}

/// Small labelled icon next to a result (Toxic, Irritant, ...)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionBadge {
    pub name: String,
    pub color: Color,
}

impl ReactionBadge {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: COLOR_WHITE }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReactionDefinition {
    /// Stable asset id. Defaults to the reaction key.
    pub id: String,
    pub display_name: String,
    /// Preferred over `display_name` when set
    pub product_name: Option<String>,
    pub ingredient_a: Option<Ingredient>,
    pub ingredient_b: Option<Ingredient>,
    pub result_color: Color,
    pub effect: EffectType,
    pub badges: Vec<ReactionBadge>,
    pub fun_fact: Option<String>,
    /// 0.0..=1.0
    pub sfx_volume: f32,
    /// Authoring switch; unavailable reactions are never indexed
    pub available: bool,
}

impl ReactionDefinition {
    /// Definition for `a + b` with default visuals. The id is the pair's key.
    pub fn between(display_name: impl Into<String>, a: Ingredient, b: Ingredient) -> Self {
        let id = ReactionKey::for_pair(Some(a.id.as_str()), Some(b.id.as_str()))
            .map(|k| k.to_string())
            .unwrap_or_default();
        Self {
            id,
            display_name: display_name.into(),
            product_name: None,
            ingredient_a: Some(a),
            ingredient_b: Some(b),
            result_color: COLOR_WHITE,
            effect: EffectType::ColorChange,
            badges: Vec::new(),
            fun_fact: None,
            sfx_volume: 1.0,
            available: true,
        }
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn with_effect(mut self, effect: EffectType) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.result_color = color;
        self
    }

    pub fn with_badge(mut self, badge: ReactionBadge) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn with_fun_fact(mut self, text: impl Into<String>) -> Self {
        self.fun_fact = Some(text.into());
        self
    }

    /// Canonical key of the ingredient pair, `None` if a slot is empty
    pub fn key(&self) -> Option<ReactionKey> {
        ReactionKey::for_pair(
            self.ingredient_a.as_ref().map(|i| i.id.as_str()),
            self.ingredient_b.as_ref().map(|i| i.id.as_str()),
        )
    }

    /// Present ingredients, A then B
    pub fn inputs(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredient_a.iter().chain(self.ingredient_b.iter())
    }

    /// Order-agnostic match: A+B == B+A
    pub fn matches(&self, x: &str, y: &str) -> bool {
        match (&self.ingredient_a, &self.ingredient_b) {
            (Some(a), Some(b)) => (a.id == x && b.id == y) || (a.id == y && b.id == x),
            _ => false,
        }
    }

    /// Product name, else display name, else the asset id
    pub fn nice_name(&self) -> &str {
        if let Some(name) = self.product_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return name;
        }
        if !self.display_name.trim().is_empty() {
            return &self.display_name;
        }
        &self.id
    }

    pub fn summary(&self) -> ReactionSummary {
        let names: Vec<&str> = self.inputs().map(Ingredient::label).collect();
        ReactionSummary {
            key: self.key(),
            title: self.nice_name().to_string(),
            ingredients_line: if names.is_empty() { None } else { Some(names.join(" + ")) },
            fun_fact: self.fun_fact.clone().filter(|s| !s.is_empty()),
            color: self.result_color,
            effect: self.effect,
            badges: self.badges.clone(),
        }
    }
}

/// What the result panel shows after a successful mix
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionSummary {
    pub key: Option<ReactionKey>,
    pub title: String,
    pub ingredients_line: Option<String>,
    pub fun_fact: Option<String>,
    pub color: Color,
    pub effect: EffectType,
    pub badges: Vec<ReactionBadge>,
}

impl ReactionSummary {
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.title.as_str()];
        if let Some(line) = &self.ingredients_line {
            lines.push(line);
        }
        if let Some(fact) = &self.fun_fact {
            lines.push(fact);
        }
        lines
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}
