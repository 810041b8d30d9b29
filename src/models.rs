// ABOUTME: Core data model - product records from the external food database and derived profiles
// ABOUTME: ProductRecord mirrors the Open Food Facts payload shape; NutrientProfile is engine-derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Engine data model.
//!
//! [`ProductRecord`] is the single external input shape: an immutable product
//! record as supplied by a third-party food database (barcode lookup, search,
//! or manual entry). The engine never mutates it and attaches no identity
//! beyond the supplied barcode string.
//!
//! [`NutrientProfile`] is the derived presence summary computed by
//! [`crate::product_analyzer::ProductAnalyzer`]: a deterministic, pure
//! function of the source record.

use serde::{Deserialize, Deserializer, Serialize};

/// Letter grade A (best) through E (worst)
///
/// Used for both Nutri-Score and Eco-Score. External payloads carry these as
/// single-letter strings in either case; anything else (e.g. `"unknown"`,
/// `"not-applicable"`) deserializes to `None` on the containing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Best grade
    A,
    /// Above average
    B,
    /// Average
    C,
    /// Below average
    D,
    /// Worst grade
    E,
}

impl Grade {
    /// Parse a grade letter, case-insensitively
    #[must_use]
    pub fn from_letter(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Zero-based index into grade-keyed point tables (A = 0 .. E = 4)
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
        }
    }
}

/// Lenient grade field deserializer: unknown strings become `None`, not errors
fn de_opt_grade<'de, D>(deserializer: D) -> Result<Option<Grade>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Grade::from_letter))
}

/// Per-100 g nutrient quantities from the external product database
///
/// All fields are optional: an absent value counts as zero everywhere in the
/// engine and therefore never triggers a presence flag or a penalty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutriments {
    /// Energy (kcal)
    pub energy_kcal: Option<f64>,
    /// Protein (g)
    pub proteins_g: Option<f64>,
    /// Carbohydrates (g)
    pub carbohydrates_g: Option<f64>,
    /// Total fat (g)
    pub fat_g: Option<f64>,
    /// Dietary fiber (g)
    pub fiber_g: Option<f64>,
    /// Sugars (g)
    pub sugars_g: Option<f64>,
    /// Saturated fat (g)
    pub saturated_fat_g: Option<f64>,
    /// Salt (g)
    pub salt_g: Option<f64>,
    /// Sodium (g)
    pub sodium_g: Option<f64>,
    /// Iron (mg)
    pub iron_mg: Option<f64>,
    /// Vitamin C (mg)
    pub vitamin_c_mg: Option<f64>,
    /// Vitamin D (µg)
    pub vitamin_d_ug: Option<f64>,
    /// Vitamin E (mg)
    pub vitamin_e_mg: Option<f64>,
    /// Calcium (mg)
    pub calcium_mg: Option<f64>,
    /// Magnesium (mg)
    pub magnesium_mg: Option<f64>,
    /// Zinc (mg)
    pub zinc_mg: Option<f64>,
    /// Potassium (mg)
    pub potassium_mg: Option<f64>,
}

/// A single product record from the external food database
///
/// Immutable input to every engine entry point. The engine is agnostic to
/// how the record was obtained; callers are responsible for fetching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// Barcode / database code identifying the product
    pub code: String,
    /// Display name
    pub product_name: String,
    /// Brand name(s)
    pub brands: String,
    /// Structured category tags (e.g. `"en:legumes"`)
    pub categories_tags: Vec<String>,
    /// Free-text category string
    pub categories: String,
    /// Free-text ingredient list
    pub ingredients_text: String,
    /// Per-100 g nutrient quantities
    pub nutriments: Nutriments,
    /// Nutri-Score letter grade (nutritional quality, A best - E worst)
    #[serde(deserialize_with = "de_opt_grade")]
    pub nutriscore_grade: Option<Grade>,
    /// NOVA processing group (1 = unprocessed .. 4 = ultra-processed)
    pub nova_group: Option<u8>,
    /// Eco-Score letter grade (environmental impact, A best - E worst)
    #[serde(deserialize_with = "de_opt_grade")]
    pub ecoscore_grade: Option<Grade>,
}

impl ProductRecord {
    /// Lowercased concatenation of category tags, category text, and
    /// ingredient text, used for keyword detection
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = String::new();
        for tag in &self.categories_tags {
            text.push_str(tag);
            text.push(' ');
        }
        text.push_str(&self.categories);
        text.push(' ');
        text.push_str(&self.ingredients_text);
        text.to_lowercase()
    }
}

/// Derived nutrient and compound presence summary for one product
///
/// Every flag is a deterministic function of the source [`ProductRecord`]
/// alone. Flags are independent booleans, not mutually exclusive; raw numeric
/// carry-overs support downstream magnitude reasoning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    // Threshold-detected nutrients (fielded values, strict ">" cutoffs)
    /// Protein above threshold
    pub has_protein: bool,
    /// Fiber above threshold
    pub has_fiber: bool,
    /// Total fat above threshold
    pub has_fat: bool,
    /// Iron above threshold
    pub has_iron: bool,
    /// Vitamin C above threshold
    pub has_vitamin_c: bool,
    /// Vitamin D above threshold
    pub has_vitamin_d: bool,
    /// Vitamin E above threshold
    pub has_vitamin_e: bool,
    /// Calcium above threshold
    pub has_calcium: bool,
    /// Magnesium above threshold
    pub has_magnesium: bool,
    /// Zinc above threshold
    pub has_zinc: bool,
    /// Potassium above threshold
    pub has_potassium: bool,

    // Keyword-detected compounds
    /// Curcumin present (turmeric products)
    pub has_curcumin: bool,
    /// Piperine present (black pepper)
    pub has_piperine: bool,
    /// Omega-3 fatty acids present
    pub has_omega_3: bool,
    /// Lycopene present (tomato products)
    pub has_lycopene: bool,
    /// Beta-carotene present
    pub has_beta_carotene: bool,
    /// Allicin present (garlic)
    pub has_allicin: bool,
    /// Quercetin present (onions, apples)
    pub has_quercetin: bool,
    /// Tannins present (tea, coffee)
    pub has_tannins: bool,
    /// Oxalates present (spinach, rhubarb)
    pub has_oxalates: bool,
    /// Caffeine present
    pub has_caffeine: bool,

    // Keyword-detected food categories
    /// Grain product
    pub is_grain: bool,
    /// Legume product
    pub is_legume: bool,
    /// Dairy product
    pub is_dairy: bool,
    /// Fruit product
    pub is_fruit: bool,
    /// Vegetable product
    pub is_vegetable: bool,
    /// Nut product
    pub is_nut: bool,
    /// Seed product
    pub is_seed: bool,
    /// Fish product
    pub is_fish: bool,
    /// Meat product
    pub is_meat: bool,

    // Raw numeric carry-overs (absent fields carried as 0.0)
    /// Iron (mg per 100 g)
    pub iron_mg: f64,
    /// Vitamin C (mg per 100 g)
    pub vitamin_c_mg: f64,
    /// Vitamin D (µg per 100 g)
    pub vitamin_d_ug: f64,
    /// Calcium (mg per 100 g)
    pub calcium_mg: f64,
    /// Protein (g per 100 g)
    pub protein_g: f64,
    /// Total fat (g per 100 g)
    pub fat_g: f64,
}

impl NutrientProfile {
    /// Names of all flags currently set, in declaration order
    #[must_use]
    pub fn active_flags(&self) -> Vec<&'static str> {
        let flags: [(&'static str, bool); 30] = [
            ("protein", self.has_protein),
            ("fiber", self.has_fiber),
            ("fat", self.has_fat),
            ("iron", self.has_iron),
            ("vitamin_c", self.has_vitamin_c),
            ("vitamin_d", self.has_vitamin_d),
            ("vitamin_e", self.has_vitamin_e),
            ("calcium", self.has_calcium),
            ("magnesium", self.has_magnesium),
            ("zinc", self.has_zinc),
            ("potassium", self.has_potassium),
            ("curcumin", self.has_curcumin),
            ("piperine", self.has_piperine),
            ("omega_3", self.has_omega_3),
            ("lycopene", self.has_lycopene),
            ("beta_carotene", self.has_beta_carotene),
            ("allicin", self.has_allicin),
            ("quercetin", self.has_quercetin),
            ("tannins", self.has_tannins),
            ("oxalates", self.has_oxalates),
            ("caffeine", self.has_caffeine),
            ("grain", self.is_grain),
            ("legume", self.is_legume),
            ("dairy", self.is_dairy),
            ("fruit", self.is_fruit),
            ("vegetable", self.is_vegetable),
            ("nut", self.is_nut),
            ("seed", self.is_seed),
            ("fish", self.is_fish),
            ("meat", self.is_meat),
        ];
        flags
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    /// Number of flags currently set
    #[must_use]
    pub fn flag_count(&self) -> usize {
        self.active_flags().len()
    }
}
