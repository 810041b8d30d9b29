// ABOUTME: Product quality scorer - additive 0-100 healthiness score from grades and ingredients
// ABOUTME: Sums independent point terms from a neutral 50, then clamps and bands the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Product quality scorer.
//!
//! Computes a 0-100 healthiness score for one product, independent of the
//! pairing engine. The score starts at a neutral 50 and sums point terms
//! that never depend on each other:
//!
//! - Nutri-Score grade: A +30, B +15, C 0, D -15, E -30
//! - NOVA processing group: 1 +15, 2 +5, 3 -5, 4 -15 (group 4 also warns)
//! - Additives: -2 per distinct E-number, floored at -15 total
//! - Eco-Score grade: A +5 .. E -5
//! - Organic label: +5
//! - Problematic ingredients (high sugar/salt/saturated fat, palm oil,
//!   artificial sweeteners): -3 each, uncapped
//!
//! Absent fields contribute nothing; the function is total over any record.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::ScorerConfig;
use crate::models::ProductRecord;
use crate::nutrition_constants::{keywords, rating_bands, score_weights};

/// E-number additive pattern: the letter E followed by 3-4 digits
///
/// Compiled once on first use; a failed compile degrades to "no additives
/// detected" rather than panicking.
static E_NUMBER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[eE]\d{3,4}\b").ok());

/// Four-way rating band for the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Score 75-100
    Excellent,
    /// Score 50-74
    Good,
    /// Score 25-49
    Poor,
    /// Score 0-24
    Bad,
}

impl Rating {
    /// Band for a clamped 0-100 score
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= rating_bands::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= rating_bands::GOOD_MIN {
            Self::Good
        } else if score >= rating_bands::POOR_MIN {
            Self::Poor
        } else {
            Self::Bad
        }
    }

    /// Display color (hex) for this band
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#1E8F4E",
            Self::Good => "#85BB2F",
            Self::Poor => "#EF7E1A",
            Self::Bad => "#E63E11",
        }
    }

    /// Display emoji for this band
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "🟢",
            Self::Good => "🟡",
            Self::Poor => "🟠",
            Self::Bad => "🔴",
        }
    }

    /// Display description for this band
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent nutritional quality",
            Self::Good => "Good nutritional quality",
            Self::Poor => "Poor nutritional quality",
            Self::Bad => "Bad nutritional quality",
        }
    }
}

/// Point contribution per score term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Nutri-Score grade term
    pub nutrition_grade: i32,
    /// NOVA processing group term
    pub processing_level: i32,
    /// Cumulative additive penalty (floored)
    pub additives: i32,
    /// Eco-Score grade term
    pub environmental_grade: i32,
    /// Organic label bonus
    pub organic_bonus: i32,
    /// Cumulative problematic-ingredient penalty (uncapped)
    pub problematic_ingredients: i32,
}

impl ScoreBreakdown {
    /// Sum of all terms (before the base score and clamping)
    #[must_use]
    pub fn total(&self) -> i32 {
        self.nutrition_grade
            + self.processing_level
            + self.additives
            + self.environmental_grade
            + self.organic_bonus
            + self.problematic_ingredients
    }
}

/// Quality score result for one product
#[derive(Debug, Clone, Serialize)]
pub struct ProductScore {
    /// Final score in [0, 100]
    pub score: u8,
    /// Rating band
    pub rating: Rating,
    /// Display color for the band
    pub color: &'static str,
    /// Display emoji for the band
    pub emoji: &'static str,
    /// Display description for the band
    pub description: &'static str,
    /// Point contributions by source
    pub breakdown: ScoreBreakdown,
    /// User-facing warnings (additives, processing, problematic ingredients)
    pub warnings: Vec<String>,
    /// User-facing positive notes (e.g. organic label)
    pub recommendations: Vec<String>,
}

/// Computes 0-100 quality scores for products
#[derive(Debug, Clone, Default)]
pub struct ProductScorer {
    config: ScorerConfig,
}

impl ProductScorer {
    /// Create a scorer with custom problematic-ingredient cutoffs
    #[must_use]
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score one product
    ///
    /// Pure and total: identical records always yield identical scores, and
    /// any missing field contributes no points rather than failing.
    #[must_use]
    pub fn score(&self, product: &ProductRecord) -> ProductScore {
        let mut breakdown = ScoreBreakdown::default();
        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();

        if let Some(grade) = product.nutriscore_grade {
            breakdown.nutrition_grade = score_weights::NUTRISCORE_POINTS[grade.index()];
        }

        if let Some(nova) = product.nova_group {
            if (1..=4).contains(&nova) {
                breakdown.processing_level = score_weights::NOVA_POINTS[usize::from(nova) - 1];
                if nova == 4 {
                    warnings.push("Ultra-processed food (NOVA group 4)".to_owned());
                }
            }
        }

        let additives = detect_additives(&product.ingredients_text);
        if !additives.is_empty() {
            breakdown.additives = (score_weights::ADDITIVE_PENALTY * additives.len() as i32)
                .max(score_weights::ADDITIVE_PENALTY_FLOOR);
            let shown = additives
                .iter()
                .take(score_weights::ADDITIVE_WARNING_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            warnings.push(format!(
                "Contains {} additive(s): {shown}",
                additives.len()
            ));
        }

        if let Some(grade) = product.ecoscore_grade {
            breakdown.environmental_grade = score_weights::ECOSCORE_POINTS[grade.index()];
        }

        let text = product.searchable_text();

        if keywords::ORGANIC.iter().any(|marker| text.contains(marker)) {
            breakdown.organic_bonus = score_weights::ORGANIC_BONUS;
            recommendations.push("Organic product".to_owned());
        }

        breakdown.problematic_ingredients =
            self.apply_problematic_penalties(product, &text, &mut warnings);

        let raw = score_weights::BASE_SCORE + breakdown.total();
        let score = raw.clamp(0, 100) as u8;
        let rating = Rating::from_score(score);

        tracing::debug!(code = %product.code, score, ?rating, "scored product");

        ProductScore {
            score,
            rating,
            color: rating.color(),
            emoji: rating.emoji(),
            description: rating.description(),
            breakdown,
            warnings,
            recommendations,
        }
    }

    /// Per-hit -3 penalties for problematic ingredients; all hits apply
    fn apply_problematic_penalties(
        &self,
        product: &ProductRecord,
        text: &str,
        warnings: &mut Vec<String>,
    ) -> i32 {
        let n = &product.nutriments;
        let mut hits: Vec<String> = Vec::new();

        if n.sugars_g.unwrap_or(0.0) > self.config.sugar_g {
            hits.push(format!("High sugar (>{:.0} g/100 g)", self.config.sugar_g));
        }
        if n.salt_g.unwrap_or(0.0) > self.config.salt_g {
            hits.push(format!("High salt (>{:.1} g/100 g)", self.config.salt_g));
        }
        if n.saturated_fat_g.unwrap_or(0.0) > self.config.saturated_fat_g {
            hits.push(format!(
                "High saturated fat (>{:.0} g/100 g)",
                self.config.saturated_fat_g
            ));
        }
        if keywords::PALM_OIL.iter().any(|marker| text.contains(marker)) {
            hits.push("Contains palm oil".to_owned());
        }
        if keywords::ARTIFICIAL_SWEETENERS
            .iter()
            .any(|marker| text.contains(marker))
        {
            hits.push("Contains artificial sweetener".to_owned());
        }

        let penalty = score_weights::PROBLEMATIC_PENALTY * hits.len() as i32;
        warnings.append(&mut hits);
        penalty
    }
}

/// Distinct E-numbers in the ingredient text, uppercased, in order found
fn detect_additives(ingredients_text: &str) -> Vec<String> {
    let Some(regex) = E_NUMBER_REGEX.as_ref() else {
        return Vec::new();
    };
    let mut seen = Vec::new();
    for found in regex.find_iter(ingredients_text) {
        let normalized = found.as_str().to_ascii_uppercase();
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}
