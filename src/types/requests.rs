use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::identifiers::{CategoryId, ToolId};
use super::model::PricingModel;

/// A structured filter request.
///
/// Every dimension is optional: an empty list (or `None` threshold) places no
/// constraint on that dimension. Active dimensions combine with logical AND.
/// Unrecognized fields in serialized criteria are rejected rather than
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct FilterCriteria {
    /// OR semantics: a tool matching any one category qualifies.
    pub category_ids: Vec<CategoryId>,
    pub pricing_models: Vec<PricingModel>,
    /// AND semantics: a tool must carry every listed feature name exactly.
    pub features: Vec<String>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.category_ids.is_empty()
            && self.pricing_models.is_empty()
            && self.features.is_empty()
            && self.min_rating.is_none()
    }
}

/// User preference signals consumed by the scoring engine. Ephemeral; never
/// persisted by this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PreferenceProfile {
    pub categories: Vec<CategoryId>,
    /// Keywords matched as case-insensitive substrings of tool feature names.
    pub features: Vec<String>,
    pub pricing_models: Vec<PricingModel>,
    pub previously_viewed: Vec<ToolId>,
}

impl PreferenceProfile {
    /// Whether the profile carries enough signal for personalized scoring.
    ///
    /// A pricing preference alone does not count: without categories,
    /// feature keywords, or a viewing history the recommender falls back to
    /// rating order.
    pub fn has_signal(&self) -> bool {
        !self.categories.is_empty()
            || !self.features.is_empty()
            || !self.previously_viewed.is_empty()
    }
}

/// Explicit sort orders a caller may request on a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest `average_rating` first.
    Rating,
    /// Lexicographic name, ascending.
    Name,
    /// Most recent `created_at` first.
    Newest,
}

/// Ranking modes exposed by the recommender, all sharing one result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Personalized weighted scoring (rating fallback without signal).
    ForYou,
    /// Tools flagged trending, catalog order.
    Trending,
    /// Most recently added tools.
    New,
}

/// Raised when a caller names a sort key or rank mode this crate does not
/// implement. Misuse is surfaced instead of silently no-opping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeParseError {
    #[error("unsupported sort key: {0}")]
    SortKey(String),
    #[error("unsupported rank mode: {0}")]
    RankMode(String),
}

impl FromStr for SortKey {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            "newest" => Ok(SortKey::Newest),
            other => Err(ModeParseError::SortKey(other.to_string())),
        }
    }
}

impl FromStr for RankMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foryou" => Ok(RankMode::ForYou),
            "trending" => Ok(RankMode::Trending),
            "new" => Ok(RankMode::New),
            other => Err(ModeParseError::RankMode(other.to_string())),
        }
    }
}
