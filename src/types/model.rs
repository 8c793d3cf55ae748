use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{CategoryId, ReviewId, ToolId, UserId};

/// How a tool charges its users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
    OneTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub name: String,
    pub price: f64,
    pub billing_period: BillingPeriod,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Pricing descriptor. Every field except `has_free_tier` is optional in the
/// source data; a record with no model simply never matches a pricing filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub model: Option<PricingModel>,
    #[serde(default)]
    pub starting_price: Option<f64>,
    #[serde(default)]
    pub has_free_tier: bool,
    #[serde(default)]
    pub price_tiers: Option<Vec<PriceTier>>,
}

/// A catalog entry for a third-party AI product.
///
/// `category_ids` and `features` preserve insertion order for display but are
/// treated as sets by the engines. `average_rating` and `review_count` are
/// derived aggregates; [`crate::catalog::Catalog::new`] recomputes them from
/// the attached reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: ToolId,
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub industry_ids: Vec<String>,
    pub features: Vec<String>,
    pub pricing: Pricing,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: usize,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_trending: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tool {
    pub fn in_category(&self, category: &CategoryId) -> bool {
        self.category_ids.contains(category)
    }

    /// Exact, case-sensitive feature membership. Comparison presence checks
    /// use this deliberately strict form.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    /// Number of tools referencing this category. Derived; overwritten at
    /// catalog construction.
    #[serde(default)]
    pub tool_count: usize,
}

/// Per-dimension ratings attached to a review, each on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRatings {
    pub ease_of_use: f64,
    pub value_for_money: f64,
    pub customer_support: f64,
    pub features: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub tool_id: ToolId,
    pub user_id: UserId,
    pub rating: f64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub dimension_ratings: DimensionRatings,
    #[serde(default)]
    pub helpful_count: u32,
    #[serde(default)]
    pub verified_purchase: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: UserId,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub tool_ids: Vec<ToolId>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub is_featured: bool,
}
