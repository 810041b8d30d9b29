// ABOUTME: Fixed detection keywords, score weight tables, and rating band cutoffs
// ABOUTME: Treated as frozen configuration - tests pin these values, do not tune casually
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Nutrition detection and scoring constants.
//!
//! This module contains the fixed keyword trigger lists and point tables used
//! by the product analyzer and the quality scorer. Numeric detection
//! thresholds live in [`crate::config`] so callers can override them; the
//! keyword lists below are deliberately plain constants because they are part
//! of the engine's observable contract (tests pin them) rather than tunables.

/// Keyword trigger lists for compound and category detection
///
/// Matching is a case-insensitive substring search over the concatenation of
/// category tags, the free-text category string, and the ingredient list.
/// Lists are ad hoc by design: they reproduce the curated app vocabulary,
/// not an authoritative nutrition taxonomy.
pub mod keywords {
    /// Curcumin sources (turmeric-based products)
    pub const CURCUMIN: &[&str] = &["turmeric", "curcumin"];

    /// Piperine sources (black pepper)
    pub const PIPERINE: &[&str] = &["black pepper", "pepper", "piperine"];

    /// Omega-3 fatty acid sources (oily fish, flax, walnuts, chia)
    pub const OMEGA_3: &[&str] = &[
        "fish", "salmon", "sardine", "mackerel", "herring", "flax", "walnut", "chia",
    ];

    /// Lycopene sources (tomatoes and derived products)
    pub const LYCOPENE: &[&str] = &["tomato", "watermelon", "lycopene"];

    /// Beta-carotene sources (orange vegetables and fruit)
    pub const BETA_CAROTENE: &[&str] = &["carrot", "sweet potato", "pumpkin", "apricot", "mango"];

    /// Allicin sources (garlic)
    pub const ALLICIN: &[&str] = &["garlic", "allicin"];

    /// Quercetin sources (onions, apples, capers)
    pub const QUERCETIN: &[&str] = &["onion", "apple", "caper", "quercetin"];

    /// Tannin sources (tea, coffee)
    pub const TANNINS: &[&str] = &["tea", "coffee", "tannin"];

    /// Oxalate-rich foods (spinach, rhubarb, beets, chard)
    pub const OXALATES: &[&str] = &["spinach", "rhubarb", "beet", "chard", "sorrel"];

    /// Caffeine sources
    pub const CAFFEINE: &[&str] = &["coffee", "caffeine", "guarana", "energy drink", "cola"];

    /// Grain category triggers
    pub const GRAIN: &[&str] = &[
        "wheat", "rice", "oat", "barley", "rye", "bread", "pasta", "cereal", "quinoa", "corn",
    ];

    /// Legume category triggers
    pub const LEGUME: &[&str] = &["bean", "lentil", "chickpea", "pea", "soy", "tofu", "legume"];

    /// Dairy category triggers
    pub const DAIRY: &[&str] = &["milk", "cheese", "yogurt", "yoghurt", "dairy", "cream", "kefir"];

    /// Fruit category triggers
    pub const FRUIT: &[&str] = &[
        "fruit", "apple", "banana", "orange", "berry", "grape", "mango", "kiwi",
    ];

    /// Vegetable category triggers
    pub const VEGETABLE: &[&str] = &[
        "vegetable", "broccoli", "spinach", "carrot", "kale", "cabbage", "zucchini",
    ];

    /// Nut category triggers
    pub const NUT: &[&str] = &["almond", "walnut", "cashew", "hazelnut", "pistachio", "peanut"];

    /// Seed category triggers
    pub const SEED: &[&str] = &["chia", "flax", "sesame", "sunflower seed", "pumpkin seed", "hemp seed"];

    /// Fish category triggers
    pub const FISH: &[&str] = &["fish", "salmon", "tuna", "sardine", "cod", "mackerel", "trout"];

    /// Meat category triggers
    pub const MEAT: &[&str] = &["meat", "beef", "chicken", "pork", "lamb", "turkey", "veal"];

    /// Organic product markers (label tags or ingredient text)
    pub const ORGANIC: &[&str] = &["organic", "en:organic"];

    /// Palm oil markers
    pub const PALM_OIL: &[&str] = &["palm oil", "palm kernel", "palm fat"];

    /// Artificial sweetener vocabulary
    ///
    /// Fixed configuration carried over from the curated app data; not an
    /// exhaustive list of sweeteners.
    pub const ARTIFICIAL_SWEETENERS: &[&str] = &[
        "aspartame",
        "sucralose",
        "acesulfame",
        "saccharin",
        "cyclamate",
        "neotame",
    ];
}

/// Point tables for the product quality score
///
/// The score starts at a neutral 50 and sums independent terms, then clamps
/// to [0, 100]. Grade weights follow the Nutri-Score/NOVA/Eco-Score display
/// conventions used by consumer scanning apps.
pub mod score_weights {
    /// Neutral starting score before any term is applied
    pub const BASE_SCORE: i32 = 50;

    /// Nutri-Score letter grade terms, A through E
    ///
    /// Nutri-Score algorithm: Santé publique France (2017),
    /// <https://www.santepubliquefrance.fr/determinants-de-sante/nutrition-et-activite-physique/articles/nutri-score>
    pub const NUTRISCORE_POINTS: [i32; 5] = [30, 15, 0, -15, -30];

    /// NOVA processing group terms, groups 1 through 4
    ///
    /// NOVA classification: Monteiro et al. (2018), Public Health Nutrition 21(1),
    /// DOI: 10.1017/S1368980017000234
    pub const NOVA_POINTS: [i32; 4] = [15, 5, -5, -15];

    /// Eco-Score letter grade terms, A through E
    pub const ECOSCORE_POINTS: [i32; 5] = [5, 2, 0, -2, -5];

    /// Penalty per distinct E-number additive detected
    pub const ADDITIVE_PENALTY: i32 = -2;

    /// Floor for the cumulative additive penalty
    pub const ADDITIVE_PENALTY_FLOOR: i32 = -15;

    /// Number of additives named in the additive warning
    pub const ADDITIVE_WARNING_LIMIT: usize = 3;

    /// Bonus for organic-labelled products
    pub const ORGANIC_BONUS: i32 = 5;

    /// Penalty per problematic-ingredient hit (uncapped, unlike additives)
    pub const PROBLEMATIC_PENALTY: i32 = -3;
}

/// Cutoffs for problematic-ingredient detection (per 100 g)
///
/// Thresholds follow the UK FSA/Nutri-Score "high" bands for sugars, salt,
/// and saturated fat used in front-of-pack labelling.
pub mod problematic {
    /// Sugar above this many grams per 100 g is flagged
    pub const SUGAR_G: f64 = 15.0;

    /// Salt above this many grams per 100 g is flagged
    pub const SALT_G: f64 = 1.5;

    /// Saturated fat above this many grams per 100 g is flagged
    pub const SATURATED_FAT_G: f64 = 10.0;
}

/// Rating band cutoffs for the 0-100 product score
pub mod rating_bands {
    /// Minimum score for the "excellent" band
    pub const EXCELLENT_MIN: u8 = 75;

    /// Minimum score for the "good" band
    pub const GOOD_MIN: u8 = 50;

    /// Minimum score for the "poor" band; below this is "bad"
    pub const POOR_MIN: u8 = 25;
}

/// Meal combination score parameters
///
/// Intentionally unweighted by fact magnitude so the score stays monotonic
/// in the finding counts.
pub mod meal_score {
    /// Neutral score for a meal with no detected relationships
    pub const BASE_SCORE: i32 = 50;

    /// Bonus per synergy finding
    pub const SYNERGY_BONUS: i32 = 10;

    /// Penalty per antagonism finding
    pub const ANTAGONISM_PENALTY: i32 = 15;
}

/// Maximum number of quick tips emitted per pairing analysis
pub const QUICK_TIP_LIMIT: usize = 3;
