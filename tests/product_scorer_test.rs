// ABOUTME: Integration tests for the 0-100 product quality score
// ABOUTME: Pins the grade/NOVA/eco point tables, additive floor, clamping, and banding
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Tests for the product quality scorer:
//! - exact point arithmetic for each independent term
//! - additive penalty floored at -15, problematic penalties uncapped
//! - final score clamped to [0, 100], banded into four ratings

mod common;

use common::base_product;
use nutripair::models::{Grade, Nutriments, ProductRecord};
use nutripair::product_scorer::{ProductScorer, Rating};

fn score(product: &ProductRecord) -> nutripair::product_scorer::ProductScore {
    ProductScorer::default().score(product)
}

// ============================================================================
// Point arithmetic
// ============================================================================

#[test]
fn grade_a_nova_1_scores_ninety_five() {
    let product = ProductRecord {
        nutriscore_grade: Some(Grade::A),
        nova_group: Some(1),
        ..base_product("Steel Cut Oats")
    };
    let result = score(&product);

    assert_eq!(result.score, 95, "50 + 30 (grade A) + 15 (NOVA 1)");
    assert_eq!(result.rating, Rating::Excellent);
    assert_eq!(result.breakdown.nutrition_grade, 30);
    assert_eq!(result.breakdown.processing_level, 15);
    assert!(result.warnings.is_empty());
}

#[test]
fn missing_fields_contribute_nothing() {
    let result = score(&ProductRecord::default());
    assert_eq!(result.score, 50, "no data means the neutral base score");
    assert_eq!(result.rating, Rating::Good);
    assert_eq!(result.breakdown.total(), 0);
}

#[test]
fn nutriscore_point_ladder() {
    let expectations = [
        (Grade::A, 80),
        (Grade::B, 65),
        (Grade::C, 50),
        (Grade::D, 35),
        (Grade::E, 20),
    ];
    for (grade, expected) in expectations {
        let product = ProductRecord {
            nutriscore_grade: Some(grade),
            ..base_product("Ladder")
        };
        assert_eq!(score(&product).score, expected, "grade {grade:?}");
    }
}

#[test]
fn nova_4_penalizes_and_warns() {
    let product = ProductRecord {
        nova_group: Some(4),
        ..base_product("Instant Snack")
    };
    let result = score(&product);

    assert_eq!(result.score, 35, "50 - 15 for NOVA 4");
    assert!(
        result.warnings.iter().any(|w| w.contains("Ultra-processed")),
        "NOVA 4 must add its fixed warning: {:?}",
        result.warnings
    );
}

#[test]
fn ecoscore_term_uses_the_smaller_ladder() {
    let product = ProductRecord {
        ecoscore_grade: Some(Grade::A),
        ..base_product("Local Greens")
    };
    assert_eq!(score(&product).score, 55, "50 + 5 for Eco-Score A");

    let worst = ProductRecord {
        ecoscore_grade: Some(Grade::E),
        ..base_product("Air-Freighted")
    };
    assert_eq!(score(&worst).score, 45, "50 - 5 for Eco-Score E");
}

// ============================================================================
// Additives
// ============================================================================

#[test]
fn each_distinct_additive_costs_two_points() {
    let product = ProductRecord {
        ingredients_text: "water, E330, E471, e202".to_owned(),
        ..base_product("Soft Drink")
    };
    let result = score(&product);

    assert_eq!(result.breakdown.additives, -6, "3 distinct additives");
    assert_eq!(result.score, 44);
    assert!(
        result.warnings.iter().any(|w| w.contains("E330")),
        "warning must list the first additives found: {:?}",
        result.warnings
    );
}

#[test]
fn additive_penalty_floors_at_fifteen() {
    let product = ProductRecord {
        ingredients_text: "E100, E101, E102, E104, E110, E120, E122, E124, E129".to_owned(),
        ..base_product("Rainbow Candy")
    };
    let result = score(&product);

    assert_eq!(
        result.breakdown.additives, -15,
        "9 additives x -2 floors at -15"
    );
}

#[test]
fn repeated_additives_count_once() {
    let product = ProductRecord {
        ingredients_text: "E330, e330, E330".to_owned(),
        ..base_product("Citric Mix")
    };
    assert_eq!(score(&product).breakdown.additives, -2);
}

// ============================================================================
// Organic bonus and problematic ingredients
// ============================================================================

#[test]
fn organic_marker_earns_the_bonus_and_a_recommendation() {
    let product = ProductRecord {
        categories_tags: vec!["en:organic".to_owned()],
        ..base_product("Organic Oats")
    };
    let result = score(&product);

    assert_eq!(result.score, 55);
    assert_eq!(result.breakdown.organic_bonus, 5);
    assert!(!result.recommendations.is_empty());
}

#[test]
fn problematic_hits_all_apply_without_a_cap() {
    let product = ProductRecord {
        ingredients_text: "sugar, palm oil, aspartame".to_owned(),
        nutriments: Nutriments {
            sugars_g: Some(30.0),
            salt_g: Some(2.5),
            saturated_fat_g: Some(14.0),
            ..Nutriments::default()
        },
        ..base_product("Everything Bad Bar")
    };
    let result = score(&product);

    // high sugar + high salt + high sat fat + palm oil + sweetener = 5 hits
    assert_eq!(result.breakdown.problematic_ingredients, -15);
    assert_eq!(result.warnings.len(), 5);
}

#[test]
fn problematic_cutoffs_are_strict() {
    let at_cutoff = ProductRecord {
        nutriments: Nutriments {
            sugars_g: Some(15.0),
            salt_g: Some(1.5),
            saturated_fat_g: Some(10.0),
            ..Nutriments::default()
        },
        ..base_product("Borderline")
    };
    let result = score(&at_cutoff);
    assert_eq!(
        result.breakdown.problematic_ingredients, 0,
        "values exactly at the cutoff must not be penalized"
    );
}

// ============================================================================
// Clamping and banding
// ============================================================================

#[test]
fn engineered_worst_case_clamps_to_zero() {
    let product = ProductRecord {
        nutriscore_grade: Some(Grade::E),
        nova_group: Some(4),
        ecoscore_grade: Some(Grade::E),
        ingredients_text:
            "sugar, palm oil, aspartame, E100, E101, E102, E104, E110, E120, E122, E124"
                .to_owned(),
        nutriments: Nutriments {
            sugars_g: Some(40.0),
            salt_g: Some(3.0),
            saturated_fat_g: Some(20.0),
            ..Nutriments::default()
        },
        ..base_product("Worst Case")
    };
    let result = score(&product);

    assert_eq!(result.score, 0, "sum below zero must clamp to 0");
    assert_eq!(result.rating, Rating::Bad);
}

#[test]
fn rating_metadata_is_a_pure_function_of_the_band() {
    let excellent = Rating::Excellent;
    assert_eq!(excellent.color(), "#1E8F4E");
    assert!(!excellent.emoji().is_empty());
    assert!(excellent.description().contains("Excellent"));

    assert_ne!(Rating::Bad.color(), Rating::Good.color());
}

#[test]
fn scoring_is_idempotent() {
    let product = ProductRecord {
        nutriscore_grade: Some(Grade::B),
        nova_group: Some(2),
        ingredients_text: "oats, E471, organic honey".to_owned(),
        ..base_product("Granola")
    };
    let scorer = ProductScorer::default();
    let first = scorer.score(&product);
    for _ in 0..10 {
        let again = scorer.score(&product);
        assert_eq!(again.score, first.score);
        assert_eq!(again.rating, first.rating);
        assert_eq!(again.breakdown, first.breakdown);
        assert_eq!(again.warnings, first.warnings);
    }
}
