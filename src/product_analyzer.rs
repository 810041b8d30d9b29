// ABOUTME: Derives a NutrientProfile from one product record - thresholds plus keyword detection
// ABOUTME: Pure and total: missing fields count as absent and never trigger a flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Product analyzer.
//!
//! Turns a raw [`ProductRecord`] into a [`NutrientProfile`] using two
//! detection strategies:
//!
//! - **Threshold detection** for fielded nutrients: a flag is set iff the
//!   per-100 g value strictly exceeds its cutoff (absent fields count as 0).
//! - **Keyword detection** for compounds and food categories without
//!   structured fields: case-insensitive substring search over the
//!   concatenated category tags, category text, and ingredient text.
//!
//! All flags are computed independently; recomputing from the same record
//! always yields the same profile.

use crate::config::AnalyzerConfig;
use crate::models::{NutrientProfile, ProductRecord};
use crate::nutrition_constants::keywords;

/// True iff the fielded value strictly exceeds the cutoff (absent = 0)
fn exceeds(value: Option<f64>, cutoff: f64) -> bool {
    value.unwrap_or(0.0) > cutoff
}

/// True iff any keyword occurs as a substring of the (lowercased) text
fn contains_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|keyword| text.contains(keyword))
}

/// Derives nutrient presence profiles from raw product records
#[derive(Debug, Clone, Default)]
pub struct ProductAnalyzer {
    config: AnalyzerConfig,
}

impl ProductAnalyzer {
    /// Create an analyzer with custom detection thresholds
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The detection thresholds in use
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Derive the nutrient profile for one product
    ///
    /// Pure and total: identical records always yield identical profiles,
    /// and no input shape produces an error.
    #[must_use]
    pub fn analyze(&self, product: &ProductRecord) -> NutrientProfile {
        let cfg = &self.config;
        let n = &product.nutriments;
        let text = product.searchable_text();

        let profile = NutrientProfile {
            has_protein: exceeds(n.proteins_g, cfg.protein_g),
            has_fiber: exceeds(n.fiber_g, cfg.fiber_g),
            has_fat: exceeds(n.fat_g, cfg.fat_g),
            has_iron: exceeds(n.iron_mg, cfg.iron_mg),
            has_vitamin_c: exceeds(n.vitamin_c_mg, cfg.vitamin_c_mg),
            has_vitamin_d: exceeds(n.vitamin_d_ug, cfg.vitamin_d_ug),
            has_vitamin_e: exceeds(n.vitamin_e_mg, cfg.vitamin_e_mg),
            has_calcium: exceeds(n.calcium_mg, cfg.calcium_mg),
            has_magnesium: exceeds(n.magnesium_mg, cfg.magnesium_mg),
            has_zinc: exceeds(n.zinc_mg, cfg.zinc_mg),
            has_potassium: exceeds(n.potassium_mg, cfg.potassium_mg),

            has_curcumin: contains_any(&text, keywords::CURCUMIN),
            has_piperine: contains_any(&text, keywords::PIPERINE),
            has_omega_3: contains_any(&text, keywords::OMEGA_3),
            has_lycopene: contains_any(&text, keywords::LYCOPENE),
            has_beta_carotene: contains_any(&text, keywords::BETA_CAROTENE),
            has_allicin: contains_any(&text, keywords::ALLICIN),
            has_quercetin: contains_any(&text, keywords::QUERCETIN),
            has_tannins: contains_any(&text, keywords::TANNINS),
            has_oxalates: contains_any(&text, keywords::OXALATES),
            has_caffeine: contains_any(&text, keywords::CAFFEINE),

            is_grain: contains_any(&text, keywords::GRAIN),
            is_legume: contains_any(&text, keywords::LEGUME),
            is_dairy: contains_any(&text, keywords::DAIRY),
            is_fruit: contains_any(&text, keywords::FRUIT),
            is_vegetable: contains_any(&text, keywords::VEGETABLE),
            is_nut: contains_any(&text, keywords::NUT),
            is_seed: contains_any(&text, keywords::SEED),
            is_fish: contains_any(&text, keywords::FISH),
            is_meat: contains_any(&text, keywords::MEAT),

            iron_mg: n.iron_mg.unwrap_or(0.0),
            vitamin_c_mg: n.vitamin_c_mg.unwrap_or(0.0),
            vitamin_d_ug: n.vitamin_d_ug.unwrap_or(0.0),
            calcium_mg: n.calcium_mg.unwrap_or(0.0),
            protein_g: n.proteins_g.unwrap_or(0.0),
            fat_g: n.fat_g.unwrap_or(0.0),
        };

        tracing::debug!(
            code = %product.code,
            flags = profile.flag_count(),
            "analyzed product"
        );
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_never_trigger_threshold_flags() {
        let analyzer = ProductAnalyzer::default();
        let profile = analyzer.analyze(&ProductRecord::default());
        assert_eq!(profile.flag_count(), 0, "empty record must yield no flags");
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let analyzer = ProductAnalyzer::default();
        let product = ProductRecord {
            ingredients_text: "TURMERIC extract".to_owned(),
            ..ProductRecord::default()
        };
        assert!(analyzer.analyze(&product).has_curcumin);
    }
}
