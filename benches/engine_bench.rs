// ABOUTME: Criterion benchmarks for the pairing engine hot paths
// ABOUTME: Measures profile derivation, pairing rules, the O(n^2) meal scan, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Criterion benchmarks for the NutriPair engine.
//!
//! Measures the per-product analysis paths and the pairwise meal scan at a
//! few meal sizes, since the scan is the only superlinear code path.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutripair::meal_analyzer::MealAnalyzer;
use nutripair::models::{Grade, Nutriments, ProductRecord};
use nutripair::pairing_recommender::PairingRecommender;
use nutripair::product_analyzer::ProductAnalyzer;
use nutripair::product_scorer::ProductScorer;

/// Generate synthetic products cycling through a few representative shapes
fn generate_products(count: usize) -> Vec<ProductRecord> {
    (0..count)
        .map(|index| {
            let (ingredients, iron, vitamin_c, calcium) = match index % 4 {
                0 => ("turmeric, rice, olive oil", Some(4.0), None, None),
                1 => ("black pepper, orange juice", None, Some(45.0), None),
                2 => ("milk, cream", None, None, Some(160.0)),
                _ => ("lentils, tomato, E330, E471", Some(6.5), None, None),
            };
            ProductRecord {
                code: format!("bench-{index}"),
                product_name: format!("Bench Product {index}"),
                ingredients_text: ingredients.to_owned(),
                nutriments: Nutriments {
                    iron_mg: iron,
                    vitamin_c_mg: vitamin_c,
                    calcium_mg: calcium,
                    proteins_g: Some(5.0 + (index % 10) as f64),
                    sugars_g: Some((index % 30) as f64),
                    ..Nutriments::default()
                },
                nutriscore_grade: Some(match index % 5 {
                    0 => Grade::A,
                    1 => Grade::B,
                    2 => Grade::C,
                    3 => Grade::D,
                    _ => Grade::E,
                }),
                nova_group: Some((index % 4 + 1) as u8),
                ..ProductRecord::default()
            }
        })
        .collect()
}

fn bench_product_analyzer(c: &mut Criterion) {
    let analyzer = ProductAnalyzer::default();
    let products = generate_products(100);

    let mut group = c.benchmark_group("product_analyzer");
    group.throughput(Throughput::Elements(products.len() as u64));
    group.bench_function("analyze_100_products", |b| {
        b.iter(|| {
            for product in &products {
                black_box(analyzer.analyze(black_box(product)));
            }
        });
    });
    group.finish();
}

fn bench_pairing_recommender(c: &mut Criterion) {
    let recommender = PairingRecommender::default();
    let products = generate_products(100);

    let mut group = c.benchmark_group("pairing_recommender");
    group.throughput(Throughput::Elements(products.len() as u64));
    group.bench_function("recommend_100_products", |b| {
        b.iter(|| {
            for product in &products {
                black_box(recommender.recommend(black_box(product)));
            }
        });
    });
    group.finish();
}

fn bench_meal_analyzer(c: &mut Criterion) {
    let analyzer = MealAnalyzer::default();

    let mut group = c.benchmark_group("meal_analyzer");
    for meal_size in [2_usize, 5, 10, 25] {
        let meal = generate_products(meal_size);
        group.throughput(Throughput::Elements(meal_size as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_meal", meal_size),
            &meal,
            |b, meal| {
                b.iter(|| black_box(analyzer.analyze_meal(black_box(meal))));
            },
        );
    }
    group.finish();
}

fn bench_product_scorer(c: &mut Criterion) {
    let scorer = ProductScorer::default();
    let products = generate_products(100);

    let mut group = c.benchmark_group("product_scorer");
    group.throughput(Throughput::Elements(products.len() as u64));
    group.bench_function("score_100_products", |b| {
        b.iter(|| {
            for product in &products {
                black_box(scorer.score(black_box(product)));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_product_analyzer,
    bench_pairing_recommender,
    bench_meal_analyzer,
    bench_product_scorer
);
criterion_main!(benches);
