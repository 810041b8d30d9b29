// ABOUTME: Engine configuration structs with canonical default values and validation
// ABOUTME: Defaults reproduce the curated app behavior; overrides are for experimentation only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Engine configuration.
//!
//! Detection thresholds and scoring parameters are grouped per component,
//! each with a `Default` impl carrying the canonical values and a
//! `validate()` that rejects out-of-range overrides. Keyword trigger lists
//! are not configurable; they live in [`crate::nutrition_constants`].

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::nutrition_constants::{meal_score, problematic};

/// Presence-detection thresholds for fielded nutrients (per 100 g)
///
/// A flag is set iff the fielded value strictly exceeds its threshold;
/// absent fields count as zero and never trigger a flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Iron threshold (mg): 0.5
    pub iron_mg: f64,
    /// Vitamin C threshold (mg): 5.0
    pub vitamin_c_mg: f64,
    /// Vitamin D threshold (µg): 0.1
    pub vitamin_d_ug: f64,
    /// Vitamin E threshold (mg): 0.5
    pub vitamin_e_mg: f64,
    /// Protein threshold (g): 3.0
    pub protein_g: f64,
    /// Fiber threshold (g): 2.0
    pub fiber_g: f64,
    /// Total fat threshold (g): 3.0
    pub fat_g: f64,
    /// Calcium threshold (mg): 50.0
    pub calcium_mg: f64,
    /// Magnesium threshold (mg): 20.0
    pub magnesium_mg: f64,
    /// Zinc threshold (mg): 0.5
    pub zinc_mg: f64,
    /// Potassium threshold (mg): 100.0
    pub potassium_mg: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            iron_mg: 0.5,
            vitamin_c_mg: 5.0,
            vitamin_d_ug: 0.1,
            vitamin_e_mg: 0.5,
            protein_g: 3.0,
            fiber_g: 2.0,
            fat_g: 3.0,
            calcium_mg: 50.0,
            magnesium_mg: 20.0,
            zinc_mg: 0.5,
            potassium_mg: 100.0,
        }
    }
}

impl AnalyzerConfig {
    /// Validate threshold overrides
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ValueOutOfRange`] if any threshold is negative
    /// or not finite.
    pub fn validate(&self) -> EngineResult<()> {
        let thresholds = [
            ("iron_mg", self.iron_mg),
            ("vitamin_c_mg", self.vitamin_c_mg),
            ("vitamin_d_ug", self.vitamin_d_ug),
            ("vitamin_e_mg", self.vitamin_e_mg),
            ("protein_g", self.protein_g),
            ("fiber_g", self.fiber_g),
            ("fat_g", self.fat_g),
            ("calcium_mg", self.calcium_mg),
            ("magnesium_mg", self.magnesium_mg),
            ("zinc_mg", self.zinc_mg),
            ("potassium_mg", self.potassium_mg),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::ValueOutOfRange(format!(
                    "{name} threshold must be a non-negative finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Meal combination score parameters
///
/// The defaults are the exact score contract: 50 base, +10 per synergy
/// finding, -15 per antagonism finding, clamped to [0, 100]. Unweighted by
/// fact magnitude on purpose - the score must stay monotonic in the counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealScoringConfig {
    /// Neutral starting score: 50
    pub base_score: i32,
    /// Bonus per synergy finding: 10
    pub synergy_bonus: i32,
    /// Penalty per antagonism finding: 15
    pub antagonism_penalty: i32,
}

impl Default for MealScoringConfig {
    fn default() -> Self {
        Self {
            base_score: meal_score::BASE_SCORE,
            synergy_bonus: meal_score::SYNERGY_BONUS,
            antagonism_penalty: meal_score::ANTAGONISM_PENALTY,
        }
    }
}

impl MealScoringConfig {
    /// Validate scoring overrides
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ValueOutOfRange`] if the base score lies
    /// outside [0, 100] or a bonus/penalty is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0..=100).contains(&self.base_score) {
            return Err(EngineError::ValueOutOfRange(format!(
                "base_score must be between 0 and 100, got {}",
                self.base_score
            )));
        }
        if self.synergy_bonus < 0 || self.antagonism_penalty < 0 {
            return Err(EngineError::ValueOutOfRange(
                "synergy_bonus and antagonism_penalty must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Problematic-ingredient cutoffs for the product quality scorer (per 100 g)
///
/// Point tables for grades, additives, and the organic bonus are fixed
/// contract values in [`crate::nutrition_constants::score_weights`]; only
/// the numeric cutoffs are exposed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Sugar cutoff (g): 15.0
    pub sugar_g: f64,
    /// Salt cutoff (g): 1.5
    pub salt_g: f64,
    /// Saturated fat cutoff (g): 10.0
    pub saturated_fat_g: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            sugar_g: problematic::SUGAR_G,
            salt_g: problematic::SALT_G,
            saturated_fat_g: problematic::SATURATED_FAT_G,
        }
    }
}

impl ScorerConfig {
    /// Validate cutoff overrides
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ValueOutOfRange`] if any cutoff is negative or
    /// not finite.
    pub fn validate(&self) -> EngineResult<()> {
        let cutoffs = [
            ("sugar_g", self.sugar_g),
            ("salt_g", self.salt_g),
            ("saturated_fat_g", self.saturated_fat_g),
        ];
        for (name, value) in cutoffs {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::ValueOutOfRange(format!(
                    "{name} cutoff must be a non-negative finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
