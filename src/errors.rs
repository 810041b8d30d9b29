// ABOUTME: Error types for engine configuration validation and knowledge base lookup
// ABOUTME: The analysis entry points themselves are total and never return these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPair Contributors

//! Engine error types.
//!
//! The four analysis entry points (product analyzer, pairing recommender,
//! meal analyzer, product scorer) are total over their input shape: missing
//! fields contribute nothing rather than failing. Errors only arise from
//! explicit configuration validation and explicit fact lookup by id.

use thiserror::Error;

/// Errors surfaced by configuration validation and knowledge base access
#[derive(Debug, Error)]
pub enum EngineError {
    /// Numeric configuration value outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// No fact with the requested id exists in the knowledge base
    #[error("Unknown fact id: {0}")]
    UnknownFact(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
