// ABOUTME: Integration tests for the static nutrient interaction knowledge base
// ABOUTME: Pins id uniqueness, indexed lookup, and the content each rule table relies on
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Tests for the knowledge base:
//! - fact ids are unique within each table
//! - the indexed map agrees with the static tables
//! - every fact carries the fields downstream components rely on

use std::collections::HashSet;

use nutripair::errors::EngineError;
use nutripair::knowledge_base::{KnowledgeBase, Magnitude, ANTAGONISM_FACTS, SYNERGY_FACTS};

// ============================================================================
// Identity and lookup
// ============================================================================

#[test]
fn synergy_ids_are_unique() {
    let mut seen = HashSet::new();
    for fact in SYNERGY_FACTS {
        assert!(seen.insert(fact.id), "duplicate synergy id: {}", fact.id);
    }
}

#[test]
fn antagonism_ids_are_unique() {
    let mut seen = HashSet::new();
    for fact in ANTAGONISM_FACTS {
        assert!(seen.insert(fact.id), "duplicate antagonism id: {}", fact.id);
    }
}

#[test]
fn indexed_lookup_agrees_with_table_scan() {
    let kb = KnowledgeBase::global();
    for fact in SYNERGY_FACTS {
        let looked_up = kb.synergy(fact.id).unwrap();
        assert_eq!(looked_up.id, fact.id);
        assert_eq!(looked_up.effect, fact.effect);
    }
    for fact in ANTAGONISM_FACTS {
        let looked_up = kb.antagonism(fact.id).unwrap();
        assert_eq!(looked_up.id, fact.id);
    }
    assert_eq!(kb.synergy_count(), SYNERGY_FACTS.len());
    assert_eq!(kb.antagonism_count(), ANTAGONISM_FACTS.len());
}

#[test]
fn unknown_ids_are_rejected_loudly_on_require() {
    let kb = KnowledgeBase::global();
    assert!(kb.synergy("no-such-fact").is_none());
    assert!(matches!(
        kb.require_synergy("no-such-fact"),
        Err(EngineError::UnknownFact(_))
    ));
    assert!(matches!(
        kb.require_antagonism("no-such-fact"),
        Err(EngineError::UnknownFact(_))
    ));
}

// ============================================================================
// Content the engine relies on
// ============================================================================

#[test]
fn curcumin_piperine_fact_documents_the_2000_percent_effect() {
    let fact = KnowledgeBase::global().synergy("curcumin-piperine").unwrap();
    assert_eq!(fact.magnitude, Magnitude::VeryHigh);
    assert_eq!(fact.improvement_percent, Some(2000));
    assert!(fact.effect.contains("2000%"));
}

#[test]
fn every_fact_carries_sources_and_a_citation() {
    for fact in SYNERGY_FACTS {
        assert!(!fact.sources_a.is_empty(), "{} lacks sources_a", fact.id);
        assert!(!fact.sources_b.is_empty(), "{} lacks sources_b", fact.id);
        assert!(!fact.basis.is_empty(), "{} lacks a citation", fact.id);
        assert!(!fact.effect.is_empty(), "{} lacks an effect", fact.id);
    }
    for fact in ANTAGONISM_FACTS {
        assert!(!fact.sources_a.is_empty(), "{} lacks sources_a", fact.id);
        assert!(!fact.sources_b.is_empty(), "{} lacks sources_b", fact.id);
        assert!(!fact.basis.is_empty(), "{} lacks a citation", fact.id);
        assert!(!fact.avoidance.is_empty(), "{} lacks avoidance advice", fact.id);
    }
}

#[test]
fn magnitude_ordering_supports_tier_comparisons() {
    assert!(Magnitude::VeryHigh > Magnitude::High);
    assert!(Magnitude::High > Magnitude::Moderate);
    assert!(Magnitude::Moderate > Magnitude::Low);
}
