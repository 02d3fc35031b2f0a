use std::collections::HashMap;

use serde::Deserialize;

use crate::core::key::{is_valid_ingredient_id, ReactionKey};
use crate::domain::ingredients::{Color, Ingredient, COLOR_WHITE};
use crate::domain::reactions::{EffectType, ReactionBadge, ReactionDefinition};

/// Ingredients plus the full (unindexed) reaction list.
///
/// Reactions may repeat a pair or leave a slot empty; `ReactionTable`
/// decides what gets indexed.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    ingredients: Vec<Ingredient>,
    ingredient_by_id: HashMap<String, usize>,
    reactions: Vec<ReactionDefinition>,
}

impl Catalogue {
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    /// Catalogue from already-built parts. Ingredient ids are validated the
    /// same way bundle ids are.
    pub fn from_parts(
        ingredients: Vec<Ingredient>,
        reactions: Vec<ReactionDefinition>,
    ) -> Result<Self, String> {
        let ingredient_by_id = index_ingredients(&ingredients)?;
        Ok(Self {
            ingredients,
            ingredient_by_id,
            reactions,
        })
    }

    /// Built-in lab bench
    pub fn starter() -> Self {
        let ingredients = vec![
            Ingredient::new("vinegar", "Vinegar (Acetic Acid)").with_color(0xFFF2_EBC9),
            Ingredient::new("bakingsoda", "Baking Soda").with_color(0xFFFF_FFFF),
            Ingredient::new("bleach", "Bleach").with_color(0xFFE8_F6D0),
            Ingredient::new("ammonia", "Ammonia").with_color(0xFFD6_F0FF),
            Ingredient::new("water", "Water").with_color(0xFF9C_D3FF),
            Ingredient::new("salt", "Table Salt").with_color(0xFFF4_F4F4),
            Ingredient::new("peroxide", "Hydrogen Peroxide").with_color(0xFFE0_F7FA),
            Ingredient::new("yeast", "Yeast").with_color(0xFFC8_A165),
            Ingredient::new("coppersulfate", "Copper Sulfate").with_color(0xFF1E_88E5),
            Ingredient::new("steelwool", "Steel Wool").with_color(0xFF9E_9E9E),
            Ingredient::new("battery", "9V Battery").with_color(0xFF42_4242),
        ];

        let by_id = |id: &str| {
            ingredients
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .unwrap_or_else(|| Ingredient::new(id, id))
        };

        let reactions = vec![
            ReactionDefinition::between("Fizzy Foam", by_id("vinegar"), by_id("bakingsoda"))
                .with_effect(EffectType::Bubbles)
                .with_color(0xFFFF_F8E1)
                .with_fun_fact("Acid meets base and releases carbon dioxide bubbles."),
            ReactionDefinition::between("Toxic Gas", by_id("bleach"), by_id("ammonia"))
                .with_product_name("Chloramine Vapour")
                .with_effect(EffectType::Smoke)
                .with_color(0xFFC5_E1A5)
                .with_badge(ReactionBadge { name: "Toxic".to_string(), color: 0xFF7C_B342 })
                .with_fun_fact("Never mix these at home: the fumes damage your lungs."),
            ReactionDefinition::between("Salt Water", by_id("water"), by_id("salt"))
                .with_color(0xFFB3_E5FC)
                .with_fun_fact("Salt dissolves into sodium and chloride ions."),
            ReactionDefinition::between("Elephant Toothpaste", by_id("peroxide"), by_id("yeast"))
                .with_effect(EffectType::Heat)
                .with_color(0xFFFF_F59D)
                .with_badge(ReactionBadge { name: "Exothermic".to_string(), color: 0xFFFF_7043 })
                .with_fun_fact("Yeast catalyses peroxide into water and a rush of oxygen."),
            ReactionDefinition::between("Blue Solution", by_id("coppersulfate"), by_id("water"))
                .with_color(0xFF19_76D2)
                .with_badge(ReactionBadge { name: "Irritant".to_string(), color: 0xFFFF_CA28 }),
            ReactionDefinition::between("Burning Steel Wool", by_id("steelwool"), by_id("battery"))
                .with_effect(EffectType::Sparks)
                .with_color(0xFFFF_B300)
                .with_fun_fact("Thin iron strands heat up fast enough to burn in air."),
        ];

        let ingredient_by_id = ingredients
            .iter()
            .enumerate()
            .map(|(idx, ing)| (ing.id.clone(), idx))
            .collect();

        Self {
            ingredients,
            ingredient_by_id,
            reactions,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredient_by_id
            .get(id)
            .and_then(|&idx| self.ingredients.get(idx))
    }

    pub fn reactions(&self) -> &[ReactionDefinition] {
        &self.reactions
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        let ingredients: Vec<Ingredient> = bundle
            .ingredients
            .into_iter()
            .map(|ing| Ingredient {
                id: ing.id,
                display_name: ing.display_name,
                color: ing.color.unwrap_or(COLOR_WHITE),
            })
            .collect();

        let ingredient_by_id = index_ingredients(&ingredients)?;

        let lookup = |id: Option<String>, reaction_idx: usize| -> Result<Option<Ingredient>, String> {
            match id {
                None => Ok(None),
                Some(id) => ingredient_by_id
                    .get(&id)
                    .and_then(|&idx| ingredients.get(idx))
                    .cloned()
                    .map(Some)
                    .ok_or_else(|| format!("reaction {} references unknown ingredient: {}", reaction_idx, id)),
            }
        };

        let mut reactions = Vec::with_capacity(bundle.reactions.len());
        for (idx, r) in bundle.reactions.into_iter().enumerate() {
            let ingredient_a = lookup(r.ingredient_a, idx)?;
            let ingredient_b = lookup(r.ingredient_b, idx)?;

            let effect = match r.effect.as_deref() {
                None => EffectType::ColorChange,
                Some(s) => effect_from_str(s)?,
            };

            let id = match r.id.filter(|s| !s.is_empty()) {
                Some(id) => id,
                None => ReactionKey::for_pair(
                    ingredient_a.as_ref().map(|i| i.id.as_str()),
                    ingredient_b.as_ref().map(|i| i.id.as_str()),
                )
                .map(|k| k.to_string())
                .unwrap_or_else(|| format!("reaction_{}", idx)),
            };

            let badges = r
                .badges
                .into_iter()
                .map(|b| ReactionBadge {
                    name: b.name,
                    color: b.color.unwrap_or(COLOR_WHITE),
                })
                .collect();

            reactions.push(ReactionDefinition {
                id,
                display_name: r.display_name,
                product_name: r.product_name.filter(|s| !s.is_empty()),
                ingredient_a,
                ingredient_b,
                result_color: r.result_color.unwrap_or(COLOR_WHITE),
                effect,
                badges,
                fun_fact: r.fun_fact.filter(|s| !s.is_empty()),
                sfx_volume: r.sfx_volume.unwrap_or(1.0).clamp(0.0, 1.0),
                available: r.available.unwrap_or(true),
            });
        }

        Ok(Self {
            ingredients,
            ingredient_by_id,
            reactions,
        })
    }
}

fn index_ingredients(ingredients: &[Ingredient]) -> Result<HashMap<String, usize>, String> {
    let mut by_id = HashMap::with_capacity(ingredients.len());
    for (idx, ing) in ingredients.iter().enumerate() {
        if !is_valid_ingredient_id(&ing.id) {
            return Err(format!("invalid ingredient id: {:?}", ing.id));
        }
        if by_id.insert(ing.id.clone(), idx).is_some() {
            return Err(format!("duplicate ingredient id: {}", ing.id));
        }
    }
    Ok(by_id)
}

fn effect_from_str(s: &str) -> Result<EffectType, String> {
    match s {
        "color_change" => Ok(EffectType::ColorChange),
        "bubbles" => Ok(EffectType::Bubbles),
        "smoke" => Ok(EffectType::Smoke),
        "sparks" => Ok(EffectType::Sparks),
        "heat" => Ok(EffectType::Heat),
        _ => Err(format!("unknown effect type: {}", s)),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    ingredients: Vec<BundleIngredient>,
    #[serde(default)]
    reactions: Vec<BundleReaction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleIngredient {
    id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    color: Option<Color>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleReaction {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    ingredient_a: Option<String>,
    #[serde(default)]
    ingredient_b: Option<String>,
    #[serde(default)]
    result_color: Option<Color>,
    #[serde(default)]
    effect: Option<String>,
    #[serde(default)]
    badges: Vec<BundleBadge>,
    #[serde(default)]
    fun_fact: Option<String>,
    #[serde(default)]
    sfx_volume: Option<f32>,
    #[serde(default)]
    available: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleBadge {
    name: String,
    #[serde(default)]
    color: Option<Color>,
}
