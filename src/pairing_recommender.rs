// ABOUTME: Single-product pairing advice - ordered rule table over the nutrient profile
// ABOUTME: Emits synergy recommendations, antagonism warnings, and capped quick tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Pairing recommender.
//!
//! Runs the product analyzer once, then evaluates a fixed, ordered list of
//! condition-to-fact rules. Recommendation rules fire on
//! presence-of-one/absence-of-the-other (the product would benefit from the
//! missing partner); warning rules fire on co-presence (the product already
//! combines both sides of an antagonism). Rule registration order determines
//! output order, and that ordering is part of the observable contract.

use serde::Serialize;

use crate::knowledge_base::{AntagonismFact, KnowledgeBase, Magnitude, SynergyFact};
use crate::models::{NutrientProfile, ProductRecord};
use crate::nutrition_constants::QUICK_TIP_LIMIT;
use crate::product_analyzer::ProductAnalyzer;

/// Which side of a fact the product is missing (and should pair with)
#[derive(Debug, Clone, Copy)]
enum MissingSide {
    A,
    B,
}

/// One recommendation rule: profile condition -> synergy fact
struct RecommendationRule {
    fact_id: &'static str,
    missing: MissingSide,
    predicate: fn(&NutrientProfile) -> bool,
}

/// One warning rule: co-presence condition -> antagonism fact
struct WarningRule {
    fact_id: &'static str,
    predicate: fn(&NutrientProfile) -> bool,
}

/// Ordered recommendation rule table
///
/// Registration order is the output order; append new rules at the end.
static RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        fact_id: "curcumin-piperine",
        missing: MissingSide::B,
        predicate: |p| p.has_curcumin && !p.has_piperine,
    },
    RecommendationRule {
        fact_id: "iron-vitamin-c",
        missing: MissingSide::B,
        predicate: |p| p.has_iron && !p.has_vitamin_c,
    },
    RecommendationRule {
        fact_id: "vitamin-d-calcium",
        missing: MissingSide::A,
        predicate: |p| p.has_calcium && !p.has_vitamin_d,
    },
    RecommendationRule {
        fact_id: "lycopene-fat",
        missing: MissingSide::B,
        predicate: |p| p.has_lycopene && !p.has_fat,
    },
    RecommendationRule {
        fact_id: "beta-carotene-fat",
        missing: MissingSide::B,
        predicate: |p| p.has_beta_carotene && !p.has_fat,
    },
    RecommendationRule {
        fact_id: "grain-legume",
        missing: MissingSide::B,
        predicate: |p| p.is_grain && !p.is_legume,
    },
    RecommendationRule {
        fact_id: "grain-legume",
        missing: MissingSide::A,
        predicate: |p| p.is_legume && !p.is_grain,
    },
    RecommendationRule {
        fact_id: "magnesium-vitamin-d",
        missing: MissingSide::B,
        predicate: |p| p.has_magnesium && !p.has_vitamin_d,
    },
    RecommendationRule {
        fact_id: "omega-3-vitamin-e",
        missing: MissingSide::B,
        predicate: |p| p.has_omega_3 && !p.has_vitamin_e,
    },
];

/// Ordered warning rule table (co-presence conditions)
static WARNING_RULES: &[WarningRule] = &[
    WarningRule {
        fact_id: "calcium-iron",
        predicate: |p| p.has_calcium && p.has_iron,
    },
    WarningRule {
        fact_id: "tannins-iron",
        predicate: |p| p.has_tannins && p.has_iron,
    },
    WarningRule {
        fact_id: "oxalates-calcium",
        predicate: |p| p.has_oxalates && p.has_calcium,
    },
    WarningRule {
        fact_id: "zinc-iron",
        predicate: |p| p.has_zinc && p.has_iron,
    },
    WarningRule {
        fact_id: "caffeine-calcium",
        predicate: |p| p.has_caffeine && p.has_calcium,
    },
];

/// A synergy recommendation for one product
#[derive(Debug, Clone, Serialize)]
pub struct PairingRecommendation {
    /// The underlying synergy fact
    pub fact: &'static SynergyFact,
    /// Relevance tier (the fact's magnitude class)
    pub relevance: Magnitude,
    /// Concrete foods to pair with, drawn from the fact's missing side
    pub suggested_pairings: Vec<String>,
    /// Short user-facing explanation
    pub explanation: String,
}

/// An antagonism warning for one product
#[derive(Debug, Clone, Serialize)]
pub struct PairingWarning {
    /// The underlying antagonism fact
    pub fact: &'static AntagonismFact,
    /// Severity tier (the fact's magnitude class)
    pub severity: Magnitude,
    /// How to avoid or mitigate the interaction
    pub avoidance: String,
    /// Short user-facing explanation
    pub explanation: String,
}

/// Full pairing analysis result for one product
#[derive(Debug, Clone, Serialize)]
pub struct PairingReport {
    /// Synergy recommendations in rule registration order
    pub recommendations: Vec<PairingRecommendation>,
    /// Antagonism warnings in rule registration order
    pub warnings: Vec<PairingWarning>,
    /// Shortened highest-relevance subset, capped at a small fixed count
    pub quick_tips: Vec<String>,
}

/// Generates pairing recommendations and warnings for single products
#[derive(Debug, Clone, Default)]
pub struct PairingRecommender {
    analyzer: ProductAnalyzer,
}

impl PairingRecommender {
    /// Create a recommender using a specific analyzer (custom thresholds)
    #[must_use]
    pub fn new(analyzer: ProductAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Analyze one product and produce pairing advice
    ///
    /// A product may trigger zero, one, or many rules; an empty report means
    /// no rule matched, not a failure.
    #[must_use]
    pub fn recommend(&self, product: &ProductRecord) -> PairingReport {
        let profile = self.analyzer.analyze(product);
        let kb = KnowledgeBase::global();

        let mut recommendations = Vec::new();
        for rule in RECOMMENDATION_RULES {
            if !(rule.predicate)(&profile) {
                continue;
            }
            let Some(fact) = kb.synergy(rule.fact_id) else {
                tracing::warn!(fact_id = rule.fact_id, "recommendation rule references unknown fact");
                continue;
            };
            tracing::trace!(fact_id = fact.id, "recommendation rule matched");
            let suggested = match rule.missing {
                MissingSide::A => fact.sources_a,
                MissingSide::B => fact.sources_b,
            };
            recommendations.push(PairingRecommendation {
                fact,
                relevance: fact.magnitude,
                suggested_pairings: suggested.iter().map(|s| (*s).to_owned()).collect(),
                explanation: fact.effect.to_owned(),
            });
        }

        let mut warnings = Vec::new();
        for rule in WARNING_RULES {
            if !(rule.predicate)(&profile) {
                continue;
            }
            let Some(fact) = kb.antagonism(rule.fact_id) else {
                tracing::warn!(fact_id = rule.fact_id, "warning rule references unknown fact");
                continue;
            };
            tracing::trace!(fact_id = fact.id, "warning rule matched");
            warnings.push(PairingWarning {
                fact,
                severity: fact.magnitude,
                avoidance: fact.avoidance.to_owned(),
                explanation: fact.effect.to_owned(),
            });
        }

        let quick_tips = build_quick_tips(&recommendations, &warnings);

        tracing::debug!(
            code = %product.code,
            recommendations = recommendations.len(),
            warnings = warnings.len(),
            "pairing analysis complete"
        );

        PairingReport {
            recommendations,
            warnings,
            quick_tips,
        }
    }
}

/// Denormalized short tips: highest magnitude first, recommendations before
/// warnings at equal magnitude, capped at [`QUICK_TIP_LIMIT`]
fn build_quick_tips(
    recommendations: &[PairingRecommendation],
    warnings: &[PairingWarning],
) -> Vec<String> {
    let mut candidates: Vec<(Magnitude, String)> = Vec::new();
    for rec in recommendations {
        let tip = rec.suggested_pairings.first().map_or_else(
            || rec.explanation.clone(),
            |pairing| format!("Pair with {pairing}: {}", rec.explanation),
        );
        candidates.push((rec.relevance, tip));
    }
    for warning in warnings {
        candidates.push((warning.severity, warning.avoidance.clone()));
    }
    // Stable sort keeps recommendation-before-warning order within a tier
    candidates.sort_by(|a, b| b.0.cmp(&a.0));
    candidates
        .into_iter()
        .take(QUICK_TIP_LIMIT)
        .map(|(_, tip)| tip)
        .collect()
}
