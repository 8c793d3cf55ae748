pub mod scoring;

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{PreferenceProfile, RankMode, Tool};
pub use scoring::{ScoreBreakdown, Scorer, ScoringWeights, WeightedScorer};

/// Operational default for every ranking surface: four cards per row.
pub const DEFAULT_LIMIT: usize = 4;

/// A tool with its computed rank position context. One shape serves all
/// rank modes; `why` is populated only on the personalized path.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTool<'a> {
    pub tool: &'a Tool,
    pub score: i64,
    pub why: Option<ScoreBreakdown>,
}

pub struct Recommender<S> {
    scorer: S,
}

impl Default for Recommender<WeightedScorer> {
    fn default() -> Self {
        Self {
            scorer: WeightedScorer::default(),
        }
    }
}

impl<S> Recommender<S>
where
    S: Scorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Personalized top-`limit` recommendation.
    ///
    /// Equivalent to [`Recommender::rank`] with [`RankMode::ForYou`]: scores
    /// every tool against the profile and returns the highest scorers. A
    /// profile with no signal falls back to average-rating order; that
    /// fallback is the designed behavior for anonymous visitors, not an
    /// error.
    pub fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        profile: &PreferenceProfile,
        limit: usize,
    ) -> Vec<RankedTool<'a>> {
        self.rank(catalog, RankMode::ForYou, profile, limit)
    }

    /// Rank the catalog under one of the exposed modes, capped at `limit`.
    pub fn rank<'a>(
        &self,
        catalog: &'a Catalog,
        mode: RankMode,
        profile: &PreferenceProfile,
        limit: usize,
    ) -> Vec<RankedTool<'a>> {
        let mut ranked = match mode {
            RankMode::ForYou => {
                if profile.has_signal() {
                    self.scored(catalog, profile)
                } else {
                    debug!("profile carries no signal, ranking by rating");
                    by_rating(catalog)
                }
            }
            RankMode::Trending => catalog
                .tools()
                .iter()
                .filter(|tool| tool.is_trending)
                .map(plain)
                .collect(),
            RankMode::New => {
                let mut all: Vec<RankedTool<'a>> = catalog.tools().iter().map(plain).collect();
                all.sort_by(|a, b| b.tool.created_at.cmp(&a.tool.created_at));
                all
            }
        };
        ranked.truncate(limit);
        ranked
    }

    fn scored<'a>(&self, catalog: &'a Catalog, profile: &PreferenceProfile) -> Vec<RankedTool<'a>> {
        let mut scored: Vec<RankedTool<'a>> = catalog
            .tools()
            .iter()
            .map(|tool| {
                let details = self.scorer.score(tool, profile);
                let score = self.scorer.score_value(&details);
                RankedTool {
                    tool,
                    score,
                    why: Some(details),
                }
            })
            .collect();

        // Stable sort: equal scores keep catalog order, so ranking is
        // deterministic for identical inputs.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

fn plain(tool: &Tool) -> RankedTool<'_> {
    RankedTool {
        tool,
        score: 0,
        why: None,
    }
}

fn by_rating(catalog: &Catalog) -> Vec<RankedTool<'_>> {
    let mut all: Vec<RankedTool<'_>> = catalog.tools().iter().map(plain).collect();
    all.sort_by(|a, b| {
        b.tool
            .average_rating
            .partial_cmp(&a.tool.average_rating)
            .unwrap_or(Ordering::Equal)
    });
    all
}
