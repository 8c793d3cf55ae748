//! Filtering, scoring, and comparison engine for an AI tool catalog.
//!
//! `catalog-core` provides the immutable catalog store plus the pure engines
//! that drive a tool directory: criteria filtering, free-text search, weighted
//! preference scoring, side-by-side feature comparison, and review
//! aggregation. Every engine is a pure function over its inputs — identical
//! catalog and request always produce identical results.

pub mod catalog;
pub mod compare;
pub mod query;
pub mod ratings;
pub mod recommend;
pub mod types;
