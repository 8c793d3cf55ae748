use serde::{Deserialize, Serialize};

use crate::types::{PreferenceProfile, Tool};

/// Point weights for the additive preference score.
// Serializable and comparable so deployments can pin their weight set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub category_match: i64,
    pub feature_match: i64,
    pub pricing_match: i64,
    /// Subtracted when the tool was previously viewed, to keep the
    /// recommendation row fresh.
    pub viewed_penalty: i64,
}

impl ScoringWeights {
    pub fn v0() -> Self {
        Self {
            category_match: 2,
            feature_match: 1,
            pricing_match: 1,
            viewed_penalty: 3,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::v0()
    }
}

/// Raw match counts behind a tool's score, kept so results stay explainable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub category_matches: usize,
    pub feature_matches: usize,
    pub pricing_match: bool,
    pub previously_viewed: bool,
}

pub trait Scorer {
    fn score(&self, tool: &Tool, profile: &PreferenceProfile) -> ScoreBreakdown;

    fn score_value(&self, details: &ScoreBreakdown) -> i64;
}

/// v0: additive weighted match counting.
#[derive(Debug, Default)]
pub struct WeightedScorer {
    weights: ScoringWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, tool: &Tool, profile: &PreferenceProfile) -> ScoreBreakdown {
        let category_matches = tool
            .category_ids
            .iter()
            .filter(|cat| profile.categories.contains(cat))
            .count();

        // A tool feature counts once no matter how many keywords it hits.
        let feature_matches = tool
            .features
            .iter()
            .filter(|feature| {
                let feature = feature.to_lowercase();
                profile
                    .features
                    .iter()
                    .any(|pref| feature.contains(&pref.to_lowercase()))
            })
            .count();

        let pricing_match = match tool.pricing.model {
            Some(model) => profile.pricing_models.contains(&model),
            None => false,
        };

        let previously_viewed = profile.previously_viewed.contains(&tool.id);

        ScoreBreakdown {
            category_matches,
            feature_matches,
            pricing_match,
            previously_viewed,
        }
    }

    fn score_value(&self, details: &ScoreBreakdown) -> i64 {
        let mut score = details.category_matches as i64 * self.weights.category_match
            + details.feature_matches as i64 * self.weights.feature_match;
        if details.pricing_match {
            score += self.weights.pricing_match;
        }
        if details.previously_viewed {
            score -= self.weights.viewed_penalty;
        }
        score
    }
}
