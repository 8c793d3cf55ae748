//! Review aggregation: overall average, per-dimension averages, and the
//! five-bucket star histogram.

use serde::Serialize;

use crate::types::{DimensionRatings, Review};

/// Aggregated review statistics for one tool.
///
/// `histogram[0]` counts 5-star reviews down to `histogram[4]` for 1-star.
/// Fractional ratings bucket by `floor(rating)`. A rating outside 1-5 is
/// skipped by the histogram but still contributes to `average`; the average
/// reflects every submitted rating while the distribution bars only show
/// chartable ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub per_dimension: DimensionRatings,
    pub histogram: [u32; 5],
    pub total_reviews: usize,
}

impl RatingSummary {
    /// Share of reviews landing in the given histogram bucket, as a
    /// percentage. Zero when there are no reviews.
    pub fn bucket_percentage(&self, bucket: usize) -> f64 {
        percentage(self.histogram.get(bucket).copied().unwrap_or(0), self.total_reviews)
    }
}

/// Aggregate a tool's reviews. The empty list is well-defined: average and
/// every per-dimension value are 0, the histogram all zeros — never NaN,
/// never an error.
pub fn aggregate<'a, I>(reviews: I) -> RatingSummary
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut total = 0usize;
    let mut rating_sum = 0.0;
    let mut dims = DimensionRatings::default();
    let mut histogram = [0u32; 5];

    for review in reviews {
        total += 1;
        rating_sum += review.rating;
        dims.ease_of_use += review.dimension_ratings.ease_of_use;
        dims.value_for_money += review.dimension_ratings.value_for_money;
        dims.customer_support += review.dimension_ratings.customer_support;
        dims.features += review.dimension_ratings.features;

        let star = review.rating.floor() as i64;
        if (1..=5).contains(&star) {
            histogram[(5 - star) as usize] += 1;
        }
    }

    if total == 0 {
        return RatingSummary {
            average: 0.0,
            per_dimension: DimensionRatings::default(),
            histogram,
            total_reviews: 0,
        };
    }

    let n = total as f64;
    RatingSummary {
        average: rating_sum / n,
        per_dimension: DimensionRatings {
            ease_of_use: dims.ease_of_use / n,
            value_for_money: dims.value_for_money / n,
            customer_support: dims.customer_support / n,
            features: dims.features / n,
        },
        histogram,
        total_reviews: total,
    }
}

/// `count / total * 100`, with the empty case pinned to 0.
pub fn percentage(count: u32, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
