// ABOUTME: Meal combination analysis - pairwise synergy/antagonism scan over N products
// ABOUTME: Aggregate score starts neutral at 50, +10 per synergy, -15 per antagonism, clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Meal combination analyzer.
//!
//! Computes a nutrient profile per product, then tests every unordered
//! product pair against a fixed set of symmetric pair-predicates, each bound
//! to one knowledge base fact. Every pair is checked against every predicate
//! (full O(n²) scan, no early exit); a pair may yield several findings, one
//! per matching predicate.
//!
//! The aggregate score is intentionally simple and unweighted by fact
//! magnitude: it is a monotonic summary of the finding counts, not a proxy
//! for nutritional science.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::MealScoringConfig;
use crate::knowledge_base::{AntagonismFact, KnowledgeBase, SynergyFact};
use crate::models::{NutrientProfile, ProductRecord};
use crate::product_analyzer::ProductAnalyzer;

/// Symmetric pair-predicate bound to one synergy fact
struct SynergyPairRule {
    fact_id: &'static str,
    predicate: fn(&NutrientProfile, &NutrientProfile) -> bool,
}

/// Symmetric pair-predicate bound to one antagonism fact
struct AntagonismPairRule {
    fact_id: &'static str,
    predicate: fn(&NutrientProfile, &NutrientProfile) -> bool,
}

/// Ordered synergy pair-predicates
///
/// Each predicate is tested as `p(a, b) || p(b, a)` so rules only need to
/// state one direction.
static MEAL_SYNERGY_RULES: &[SynergyPairRule] = &[
    SynergyPairRule {
        fact_id: "curcumin-piperine",
        predicate: |a, b| a.has_curcumin && b.has_piperine,
    },
    SynergyPairRule {
        fact_id: "iron-vitamin-c",
        predicate: |a, b| a.has_iron && b.has_vitamin_c,
    },
    SynergyPairRule {
        fact_id: "vitamin-d-calcium",
        predicate: |a, b| a.has_vitamin_d && b.has_calcium,
    },
    SynergyPairRule {
        fact_id: "lycopene-fat",
        predicate: |a, b| a.has_lycopene && b.has_fat,
    },
    SynergyPairRule {
        fact_id: "beta-carotene-fat",
        predicate: |a, b| a.has_beta_carotene && b.has_fat,
    },
    SynergyPairRule {
        fact_id: "grain-legume",
        predicate: |a, b| a.is_grain && b.is_legume,
    },
    SynergyPairRule {
        fact_id: "magnesium-vitamin-d",
        predicate: |a, b| a.has_magnesium && b.has_vitamin_d,
    },
    SynergyPairRule {
        fact_id: "omega-3-vitamin-e",
        predicate: |a, b| a.has_omega_3 && b.has_vitamin_e,
    },
];

/// Ordered antagonism pair-predicates
static MEAL_ANTAGONISM_RULES: &[AntagonismPairRule] = &[
    AntagonismPairRule {
        fact_id: "calcium-iron",
        predicate: |a, b| a.has_calcium && b.has_iron,
    },
    AntagonismPairRule {
        fact_id: "tannins-iron",
        predicate: |a, b| a.has_tannins && b.has_iron,
    },
    AntagonismPairRule {
        fact_id: "oxalates-calcium",
        predicate: |a, b| a.has_oxalates && b.has_calcium,
    },
    AntagonismPairRule {
        fact_id: "zinc-iron",
        predicate: |a, b| a.has_zinc && b.has_iron,
    },
    AntagonismPairRule {
        fact_id: "caffeine-calcium",
        predicate: |a, b| a.has_caffeine && b.has_calcium,
    },
];

/// A beneficial pairing found between two products in a meal
#[derive(Debug, Clone, Serialize)]
pub struct SynergyFinding {
    /// The underlying synergy fact
    pub fact: &'static SynergyFact,
    /// Display name of the first product, in input-list order
    pub product_a: String,
    /// Display name of the second product, in input-list order
    pub product_b: String,
    /// One-line benefit description
    pub benefit: String,
}

/// A conflicting pairing found between two products in a meal
#[derive(Debug, Clone, Serialize)]
pub struct AntagonismFinding {
    /// The underlying antagonism fact
    pub fact: &'static AntagonismFact,
    /// Display name of the first product, in input-list order
    pub product_a: String,
    /// Display name of the second product, in input-list order
    pub product_b: String,
    /// One-line concern description
    pub concern: String,
}

/// Result of analyzing a set of products as one meal
#[derive(Debug, Clone, Serialize)]
pub struct MealAnalysis {
    /// Beneficial pairings, one per matching (pair, predicate)
    pub synergies: Vec<SynergyFinding>,
    /// Conflicting pairings, one per matching (pair, predicate)
    pub antagonisms: Vec<AntagonismFinding>,
    /// Aggregate meal synergy score in [0, 100]
    pub score: u8,
    /// Short suggestions derived from the finding counts
    pub suggestions: Vec<String>,
}

/// Analyzes product sets for pairwise nutrient interactions
#[derive(Debug, Clone, Default)]
pub struct MealAnalyzer {
    analyzer: ProductAnalyzer,
    scoring: MealScoringConfig,
}

impl MealAnalyzer {
    /// Create a meal analyzer with custom analyzer thresholds and scoring
    #[must_use]
    pub fn new(analyzer: ProductAnalyzer, scoring: MealScoringConfig) -> Self {
        Self { analyzer, scoring }
    }

    /// Analyze a meal (a set of products)
    ///
    /// Callers normally supply at least 2 products; fewer yields the neutral
    /// empty result (no findings, score = base). Finding product names keep
    /// the order the products appeared in the input list.
    #[must_use]
    pub fn analyze_meal(&self, products: &[ProductRecord]) -> MealAnalysis {
        // Profiles are independent per product; compute them in parallel.
        let profiles: Vec<NutrientProfile> = products
            .par_iter()
            .map(|product| self.analyzer.analyze(product))
            .collect();

        let kb = KnowledgeBase::global();
        let mut synergies = Vec::new();
        let mut antagonisms = Vec::new();

        for i in 0..profiles.len() {
            for j in (i + 1)..profiles.len() {
                let (a, b) = (&profiles[i], &profiles[j]);

                for rule in MEAL_SYNERGY_RULES {
                    if !((rule.predicate)(a, b) || (rule.predicate)(b, a)) {
                        continue;
                    }
                    let Some(fact) = kb.synergy(rule.fact_id) else {
                        tracing::warn!(fact_id = rule.fact_id, "meal rule references unknown fact");
                        continue;
                    };
                    synergies.push(SynergyFinding {
                        fact,
                        product_a: products[i].product_name.clone(),
                        product_b: products[j].product_name.clone(),
                        benefit: fact.effect.to_owned(),
                    });
                }

                for rule in MEAL_ANTAGONISM_RULES {
                    if !((rule.predicate)(a, b) || (rule.predicate)(b, a)) {
                        continue;
                    }
                    let Some(fact) = kb.antagonism(rule.fact_id) else {
                        tracing::warn!(fact_id = rule.fact_id, "meal rule references unknown fact");
                        continue;
                    };
                    antagonisms.push(AntagonismFinding {
                        fact,
                        product_a: products[i].product_name.clone(),
                        product_b: products[j].product_name.clone(),
                        concern: fact.effect.to_owned(),
                    });
                }
            }
        }

        let score = self.score(synergies.len(), antagonisms.len());
        let suggestions = build_suggestions(synergies.len(), antagonisms.len());

        tracing::debug!(
            products = products.len(),
            synergies = synergies.len(),
            antagonisms = antagonisms.len(),
            score,
            "meal analysis complete"
        );

        MealAnalysis {
            synergies,
            antagonisms,
            score,
            suggestions,
        }
    }

    /// Base + bonus per synergy - penalty per antagonism, clamped to [0, 100]
    fn score(&self, synergy_count: usize, antagonism_count: usize) -> u8 {
        let raw = self.scoring.base_score
            + self.scoring.synergy_bonus * synergy_count as i32
            - self.scoring.antagonism_penalty * antagonism_count as i32;
        raw.clamp(0, 100) as u8
    }
}

/// Suggestion strings derived from the finding counts only
fn build_suggestions(synergy_count: usize, antagonism_count: usize) -> Vec<String> {
    let mut suggestions = Vec::new();
    if synergy_count > 0 {
        suggestions.push(format!(
            "{synergy_count} beneficial pairing(s) detected - keep these foods in the same meal"
        ));
    }
    if antagonism_count > 0 {
        suggestions.push(format!(
            "{antagonism_count} absorption conflict(s) detected - consider separating these foods"
        ));
    }
    if suggestions.is_empty() {
        suggestions.push("No documented interactions between these products".to_owned());
    }
    suggestions
}
