// ABOUTME: Library root for the NutriPair food pairing intelligence engine
// ABOUTME: Pure, deterministic analysis over externally supplied product records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! # NutriPair Engine
//!
//! A pure, synchronous food-pairing intelligence engine. Given product
//! records from an external food database (barcode lookup, search, or manual
//! entry), it derives nutrient presence profiles and answers three kinds of
//! questions:
//!
//! - **Pairing advice** for a single product: which documented nutrient
//!   synergies could the product benefit from, and which antagonisms does it
//!   already combine ([`pairing_recommender`]).
//! - **Meal combination analysis** for a set of products: every pairwise
//!   synergy and antagonism, plus an aggregate 0-100 meal synergy score
//!   ([`meal_analyzer`]).
//! - **Product quality scoring**: an independent 0-100 healthiness score
//!   from Nutri-Score/NOVA/Eco-Score grades, detected additives, and
//!   problematic-ingredient heuristics ([`product_scorer`]).
//!
//! Every entry point is a deterministic function of its inputs: no I/O, no
//! shared mutable state, no hidden counters. Identical inputs always yield
//! identical outputs regardless of call interleaving, so callers may invoke
//! the engine concurrently and memoize results freely.
//!
//! # Example
//!
//! ```
//! use nutripair::models::ProductRecord;
//! use nutripair::pairing_recommender::PairingRecommender;
//!
//! let turmeric = ProductRecord {
//!     code: "123".to_owned(),
//!     product_name: "Ground Turmeric".to_owned(),
//!     ingredients_text: "turmeric".to_owned(),
//!     ..ProductRecord::default()
//! };
//!
//! let report = PairingRecommender::default().recommend(&turmeric);
//! assert_eq!(report.recommendations[0].fact.id, "curcumin-piperine");
//! ```

/// Engine configuration structs with canonical defaults
pub mod config;
/// Error types for configuration validation and fact lookup
pub mod errors;
/// Curated nutrient synergy and antagonism facts
pub mod knowledge_base;
/// Meal combination analysis (pairwise scan + aggregate score)
pub mod meal_analyzer;
/// Product records, grades, and derived nutrient profiles
pub mod models;
/// Fixed detection keywords, score weights, and rating bands
pub mod nutrition_constants;
/// Single-product pairing recommendations and warnings
pub mod pairing_recommender;
/// Nutrient profile derivation from raw product records
pub mod product_analyzer;
/// 0-100 product quality scoring
pub mod product_scorer;

pub use config::{AnalyzerConfig, MealScoringConfig, ScorerConfig};
pub use errors::{EngineError, EngineResult};
pub use knowledge_base::{AntagonismFact, KnowledgeBase, Magnitude, SynergyFact};
pub use meal_analyzer::{AntagonismFinding, MealAnalysis, MealAnalyzer, SynergyFinding};
pub use models::{Grade, NutrientProfile, Nutriments, ProductRecord};
pub use pairing_recommender::{
    PairingRecommendation, PairingRecommender, PairingReport, PairingWarning,
};
pub use product_analyzer::ProductAnalyzer;
pub use product_scorer::{ProductScore, ProductScorer, Rating, ScoreBreakdown};
