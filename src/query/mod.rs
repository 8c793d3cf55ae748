//! Criteria filtering, free-text search, and explicit sorting over the
//! catalog's tool list.
//!
//! Filtering is stable: results keep catalog insertion order unless the
//! caller asks for a [`SortKey`]. An empty criteria set is the identity.

use std::cmp::Ordering;

use tracing::debug;

use crate::types::{FilterCriteria, SortKey, Tool};

/// Apply structured criteria to a tool list.
///
/// Dimensions combine with AND; within the category dimension membership is
/// OR, within the feature dimension it is AND (the tool's feature set must be
/// a superset of the requested names, matched exactly). An absent dimension
/// constrains nothing.
pub fn filter<'a>(tools: &'a [Tool], criteria: &FilterCriteria) -> Vec<&'a Tool> {
    let matched: Vec<&Tool> = tools
        .iter()
        .filter(|tool| matches(tool, criteria))
        .collect();
    debug!(
        considered = tools.len(),
        matched = matched.len(),
        "filter applied"
    );
    matched
}

fn matches(tool: &Tool, criteria: &FilterCriteria) -> bool {
    if !criteria.category_ids.is_empty()
        && !criteria.category_ids.iter().any(|cat| tool.in_category(cat))
    {
        return false;
    }

    if !criteria.pricing_models.is_empty() {
        // A tool with no pricing model never matches an active pricing filter.
        match tool.pricing.model {
            Some(model) if criteria.pricing_models.contains(&model) => {}
            _ => return false,
        }
    }

    if !criteria
        .features
        .iter()
        .all(|feature| tool.has_feature(feature))
    {
        return false;
    }

    if let Some(min) = criteria.min_rating {
        if tool.average_rating < min {
            return false;
        }
    }

    true
}

/// Case-insensitive substring search over name, description, and feature
/// names. A single match in any field qualifies; the empty query matches
/// every tool.
pub fn search<'a>(tools: &'a [Tool], query: &str) -> Vec<&'a Tool> {
    let needle = query.to_lowercase();
    tools
        .iter()
        .filter(|tool| {
            tool.name.to_lowercase().contains(&needle)
                || tool.description.to_lowercase().contains(&needle)
                || tool
                    .features
                    .iter()
                    .any(|feature| feature.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort of an already-filtered list by an explicit key. Ties keep
/// their relative (catalog) order.
pub fn sorted<'a>(mut tools: Vec<&'a Tool>, key: SortKey) -> Vec<&'a Tool> {
    match key {
        SortKey::Rating => tools.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Name => tools.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Newest => tools.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    tools
}
