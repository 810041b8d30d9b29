// ABOUTME: Shared product fixtures for integration tests
// ABOUTME: Builders produce minimal records that set exactly the intended profile flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

#![allow(dead_code)] // each test binary uses a subset of these fixtures

use nutripair::models::{Nutriments, ProductRecord};

/// Minimal named product with no nutrients and no text
pub fn base_product(name: &str) -> ProductRecord {
    ProductRecord {
        code: format!("test-{}", name.to_lowercase().replace(' ', "-")),
        product_name: name.to_owned(),
        ..ProductRecord::default()
    }
}

/// Product whose only signal is its ingredient text
pub fn ingredient_product(name: &str, ingredients: &str) -> ProductRecord {
    ProductRecord {
        ingredients_text: ingredients.to_owned(),
        ..base_product(name)
    }
}

/// Product whose only signal is an iron value (mg per 100 g)
pub fn iron_rich(name: &str, iron_mg: f64) -> ProductRecord {
    ProductRecord {
        nutriments: Nutriments {
            iron_mg: Some(iron_mg),
            ..Nutriments::default()
        },
        ..base_product(name)
    }
}

/// Product whose only signal is a vitamin C value (mg per 100 g)
pub fn vitamin_c_rich(name: &str, vitamin_c_mg: f64) -> ProductRecord {
    ProductRecord {
        nutriments: Nutriments {
            vitamin_c_mg: Some(vitamin_c_mg),
            ..Nutriments::default()
        },
        ..base_product(name)
    }
}

/// Product whose only signal is a calcium value (mg per 100 g)
pub fn calcium_rich(name: &str, calcium_mg: f64) -> ProductRecord {
    ProductRecord {
        nutriments: Nutriments {
            calcium_mg: Some(calcium_mg),
            ..Nutriments::default()
        },
        ..base_product(name)
    }
}
