pub mod identifiers;
pub mod model;
pub mod requests;

pub use identifiers::{CategoryId, ReviewId, ToolId, UserId};
pub use model::{
    BillingPeriod, BlogPost, Category, DimensionRatings, PriceTier, Pricing, PricingModel, Review,
    Tool,
};
pub use requests::{FilterCriteria, ModeParseError, PreferenceProfile, RankMode, SortKey};
