// ABOUTME: Curated nutrient synergy and antagonism facts with an id-indexed lookup table
// ABOUTME: Static read-only data built once at first use; the engine never mutates it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Nutrient interaction knowledge base.
//!
//! A static, curated table of pairwise nutrient relationships: synergies
//! (combined consumption improves absorption or effect) and antagonisms
//! (combined consumption reduces it). Each fact carries a stable string id,
//! a magnitude class, a scientific-basis citation, and example food sources
//! for each side of the pair.
//!
//! # Scientific References
//!
//! - Shoba, G., et al. (1998). Influence of piperine on the pharmacokinetics
//!   of curcumin. *Planta Medica*, 64(4), 353-356. DOI: 10.1055/s-2006-957450
//! - Hallberg, L., et al. (1989). The role of vitamin C in iron absorption.
//!   *Int J Vitam Nutr Res Suppl*, 30, 103-108.
//! - Hallberg, L., et al. (1991). Calcium: effect of different amounts on
//!   nonheme- and heme-iron absorption. *Am J Clin Nutr*, 53(1), 112-119.
//! - Disler, P.B., et al. (1975). The effect of tea on iron absorption.
//!   *Gut*, 16(3), 193-200.
//! - Unlu, N.Z., et al. (2005). Carotenoid absorption from salad and salsa by
//!   humans is enhanced by the addition of avocado or avocado oil.
//!   *J Nutr*, 135(3), 431-436.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::errors::{EngineError, EngineResult};

/// Magnitude class of a documented nutrient interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    /// Measurable but small effect
    Low,
    /// Meaningful effect worth acting on
    Moderate,
    /// Large, well-replicated effect
    High,
    /// Exceptional effect (order-of-magnitude changes)
    VeryHigh,
}

/// A documented positive interaction between two nutrients/compounds
#[derive(Debug, Clone, Serialize)]
pub struct SynergyFact {
    /// Stable id, unique within the synergy table
    pub id: &'static str,
    /// First nutrient/compound name
    pub nutrient_a: &'static str,
    /// Second nutrient/compound name
    pub nutrient_b: &'static str,
    /// Qualitative effect description shown to users
    pub effect: &'static str,
    /// Magnitude class
    pub magnitude: Magnitude,
    /// Documented improvement, percent, where a number exists
    pub improvement_percent: Option<u32>,
    /// Scientific basis citation
    pub basis: &'static str,
    /// Example food sources for the first nutrient
    pub sources_a: &'static [&'static str],
    /// Example food sources for the second nutrient
    pub sources_b: &'static [&'static str],
    /// Optional timing guidance (e.g. "consume in the same meal")
    pub timing: Option<&'static str>,
}

/// A documented negative interaction between two nutrients/compounds
#[derive(Debug, Clone, Serialize)]
pub struct AntagonismFact {
    /// Stable id, unique within the antagonism table
    pub id: &'static str,
    /// First nutrient/compound name
    pub nutrient_a: &'static str,
    /// Second nutrient/compound name
    pub nutrient_b: &'static str,
    /// Qualitative effect description shown to users
    pub effect: &'static str,
    /// Magnitude class
    pub magnitude: Magnitude,
    /// Documented reduction, percent, where a number exists
    pub reduction_percent: Option<u32>,
    /// Scientific basis citation
    pub basis: &'static str,
    /// Example food sources for the first nutrient
    pub sources_a: &'static [&'static str],
    /// Example food sources for the second nutrient
    pub sources_b: &'static [&'static str],
    /// How to avoid the interaction (separation advice)
    pub avoidance: &'static str,
}

/// Curated synergy facts
pub static SYNERGY_FACTS: &[SynergyFact] = &[
    SynergyFact {
        id: "curcumin-piperine",
        nutrient_a: "curcumin",
        nutrient_b: "piperine",
        effect: "Piperine increases curcumin bioavailability by up to 2000%",
        magnitude: Magnitude::VeryHigh,
        improvement_percent: Some(2000),
        basis: "Shoba et al. (1998), Planta Medica 64(4)",
        sources_a: &["turmeric", "curry powder"],
        sources_b: &["black pepper"],
        timing: Some("Combine in the same dish"),
    },
    SynergyFact {
        id: "iron-vitamin-c",
        nutrient_a: "iron",
        nutrient_b: "vitamin C",
        effect: "Vitamin C boosts non-heme iron absorption by up to 300%",
        magnitude: Magnitude::High,
        improvement_percent: Some(300),
        basis: "Hallberg et al. (1989), Int J Vitam Nutr Res",
        sources_a: &["lentils", "spinach", "red meat", "fortified cereal"],
        sources_b: &["citrus fruit", "bell pepper", "kiwi", "strawberries"],
        timing: Some("Consume in the same meal"),
    },
    SynergyFact {
        id: "vitamin-d-calcium",
        nutrient_a: "vitamin D",
        nutrient_b: "calcium",
        effect: "Vitamin D is required for active intestinal calcium absorption",
        magnitude: Magnitude::High,
        improvement_percent: None,
        basis: "Heaney (2008), J Nutr 138(4)",
        sources_a: &["oily fish", "egg yolk", "fortified milk"],
        sources_b: &["dairy", "kale", "almonds", "sardines"],
        timing: None,
    },
    SynergyFact {
        id: "lycopene-fat",
        nutrient_a: "lycopene",
        nutrient_b: "fat",
        effect: "Dietary fat markedly improves lycopene uptake from tomatoes",
        magnitude: Magnitude::Moderate,
        improvement_percent: None,
        basis: "Unlu et al. (2005), J Nutr 135(3)",
        sources_a: &["tomatoes", "tomato paste", "watermelon"],
        sources_b: &["olive oil", "avocado", "nuts"],
        timing: Some("Cook or dress tomatoes with oil"),
    },
    SynergyFact {
        id: "beta-carotene-fat",
        nutrient_a: "beta-carotene",
        nutrient_b: "fat",
        effect: "Carotenoid absorption is several times higher with added fat",
        magnitude: Magnitude::Moderate,
        improvement_percent: None,
        basis: "Brown et al. (2004), Am J Clin Nutr 80(2)",
        sources_a: &["carrots", "sweet potato", "pumpkin"],
        sources_b: &["olive oil", "avocado", "full-fat dressing"],
        timing: None,
    },
    SynergyFact {
        id: "grain-legume",
        nutrient_a: "grain protein",
        nutrient_b: "legume protein",
        effect: "Grains and legumes complement each other into a complete amino acid profile",
        magnitude: Magnitude::Moderate,
        improvement_percent: None,
        basis: "Young & Pellett (1994), Am J Clin Nutr 59(5)",
        sources_a: &["rice", "wheat", "corn", "oats"],
        sources_b: &["beans", "lentils", "chickpeas", "peas"],
        timing: Some("Same meal or same day"),
    },
    SynergyFact {
        id: "magnesium-vitamin-d",
        nutrient_a: "magnesium",
        nutrient_b: "vitamin D",
        effect: "Magnesium is a cofactor for the enzymes that activate vitamin D",
        magnitude: Magnitude::Moderate,
        improvement_percent: None,
        basis: "Uwitonze & Razzaque (2018), J Am Osteopath Assoc 118(3)",
        sources_a: &["pumpkin seeds", "dark chocolate", "whole grains"],
        sources_b: &["oily fish", "fortified milk", "egg yolk"],
        timing: None,
    },
    SynergyFact {
        id: "omega-3-vitamin-e",
        nutrient_a: "omega-3",
        nutrient_b: "vitamin E",
        effect: "Vitamin E protects polyunsaturated omega-3 fats from oxidation",
        magnitude: Magnitude::Moderate,
        improvement_percent: None,
        basis: "Valk & Hornstra (2000), Int J Vitam Nutr Res 70(2)",
        sources_a: &["salmon", "sardines", "flax seed", "walnuts"],
        sources_b: &["sunflower seeds", "almonds", "wheat germ oil"],
        timing: None,
    },
];

/// Curated antagonism facts
pub static ANTAGONISM_FACTS: &[AntagonismFact] = &[
    AntagonismFact {
        id: "calcium-iron",
        nutrient_a: "calcium",
        nutrient_b: "iron",
        effect: "Calcium can reduce non-heme iron absorption by up to 50%",
        magnitude: Magnitude::High,
        reduction_percent: Some(50),
        basis: "Hallberg et al. (1991), Am J Clin Nutr 53(1)",
        sources_a: &["dairy", "calcium-fortified drinks"],
        sources_b: &["lentils", "spinach", "red meat"],
        avoidance: "Separate calcium-rich and iron-rich foods by about 2 hours",
    },
    AntagonismFact {
        id: "tannins-iron",
        nutrient_a: "tannins",
        nutrient_b: "iron",
        effect: "Tea and coffee tannins can cut iron absorption by up to 60%",
        magnitude: Magnitude::High,
        reduction_percent: Some(60),
        basis: "Disler et al. (1975), Gut 16(3)",
        sources_a: &["black tea", "green tea", "coffee"],
        sources_b: &["lentils", "fortified cereal", "spinach"],
        avoidance: "Drink tea or coffee at least 1 hour away from iron-rich meals",
    },
    AntagonismFact {
        id: "oxalates-calcium",
        nutrient_a: "oxalates",
        nutrient_b: "calcium",
        effect: "Oxalates bind calcium into insoluble complexes, blocking absorption",
        magnitude: Magnitude::High,
        reduction_percent: None,
        basis: "Heaney & Weaver (1989), Am J Clin Nutr 50(4)",
        sources_a: &["spinach", "rhubarb", "beet greens"],
        sources_b: &["dairy", "kale", "fortified drinks"],
        avoidance: "Do not rely on high-oxalate vegetables as a calcium source",
    },
    AntagonismFact {
        id: "zinc-iron",
        nutrient_a: "zinc",
        nutrient_b: "iron",
        effect: "High supplemental iron competes with zinc for intestinal uptake",
        magnitude: Magnitude::Moderate,
        reduction_percent: None,
        basis: "Solomons (1986), J Nutr 116(6)",
        sources_a: &["oysters", "pumpkin seeds", "beef"],
        sources_b: &["fortified cereal", "red meat", "lentils"],
        avoidance: "Avoid taking concentrated iron and zinc sources together",
    },
    AntagonismFact {
        id: "caffeine-calcium",
        nutrient_a: "caffeine",
        nutrient_b: "calcium",
        effect: "Caffeine modestly increases urinary calcium excretion",
        magnitude: Magnitude::Low,
        reduction_percent: None,
        basis: "Heaney (2002), Food Chem Toxicol 40(9)",
        sources_a: &["coffee", "energy drinks", "cola"],
        sources_b: &["dairy", "fortified drinks"],
        avoidance: "Keep caffeine moderate when dairy is a primary calcium source",
    },
];

/// Read-only, id-indexed view over the fact tables
///
/// Built once on first access via [`KnowledgeBase::global`]; lookups are
/// O(1) map hits instead of linear scans over the static slices.
pub struct KnowledgeBase {
    synergies: HashMap<&'static str, &'static SynergyFact>,
    antagonisms: HashMap<&'static str, &'static AntagonismFact>,
    synergy_table: &'static [SynergyFact],
    antagonism_table: &'static [AntagonismFact],
}

static GLOBAL_KNOWLEDGE_BASE: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    let synergies = SYNERGY_FACTS.iter().map(|fact| (fact.id, fact)).collect();
    let antagonisms = ANTAGONISM_FACTS
        .iter()
        .map(|fact| (fact.id, fact))
        .collect();
    KnowledgeBase {
        synergies,
        antagonisms,
        synergy_table: SYNERGY_FACTS,
        antagonism_table: ANTAGONISM_FACTS,
    }
});

impl KnowledgeBase {
    /// Process-wide knowledge base instance
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_KNOWLEDGE_BASE
    }

    /// Look up a synergy fact by id
    #[must_use]
    pub fn synergy(&self, id: &str) -> Option<&'static SynergyFact> {
        self.synergies.get(id).copied()
    }

    /// Look up an antagonism fact by id
    #[must_use]
    pub fn antagonism(&self, id: &str) -> Option<&'static AntagonismFact> {
        self.antagonisms.get(id).copied()
    }

    /// Look up a synergy fact by id, failing loudly for unknown ids
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownFact`] if no synergy fact has this id.
    pub fn require_synergy(&self, id: &str) -> EngineResult<&'static SynergyFact> {
        self.synergy(id)
            .ok_or_else(|| EngineError::UnknownFact(id.to_owned()))
    }

    /// Look up an antagonism fact by id, failing loudly for unknown ids
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownFact`] if no antagonism fact has this id.
    pub fn require_antagonism(&self, id: &str) -> EngineResult<&'static AntagonismFact> {
        self.antagonism(id)
            .ok_or_else(|| EngineError::UnknownFact(id.to_owned()))
    }

    /// Iterate all synergy facts in table order
    pub fn synergies(&self) -> impl Iterator<Item = &'static SynergyFact> {
        self.synergy_table.iter()
    }

    /// Iterate all antagonism facts in table order
    pub fn antagonisms(&self) -> impl Iterator<Item = &'static AntagonismFact> {
        self.antagonism_table.iter()
    }

    /// Number of synergy facts
    #[must_use]
    pub fn synergy_count(&self) -> usize {
        self.synergies.len()
    }

    /// Number of antagonism facts
    #[must_use]
    pub fn antagonism_count(&self) -> usize {
        self.antagonisms.len()
    }
}
