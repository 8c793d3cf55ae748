use catalog_core::catalog::Catalog;
use catalog_core::recommend::{Recommender, Scorer, WeightedScorer, DEFAULT_LIMIT};
use catalog_core::types::{
    CategoryId, PreferenceProfile, Pricing, PricingModel, RankMode, Tool, ToolId,
};
use chrono::{TimeZone, Utc};

fn make_tool(id: &str, categories: &[&str], features: &[&str], rating: f64) -> Tool {
    Tool {
        id: ToolId::from(id),
        slug: id.to_string(),
        name: id.to_string(),
        description: format!("description of {id}"),
        short_description: String::new(),
        category_ids: categories.iter().map(|c| CategoryId::from(*c)).collect(),
        industry_ids: Vec::new(),
        features: features.iter().map(|f| f.to_string()).collect(),
        pricing: Pricing {
            model: Some(PricingModel::Freemium),
            starting_price: None,
            has_free_tier: true,
            price_tiers: None,
        },
        average_rating: rating,
        review_count: 0,
        is_featured: false,
        is_trending: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn make_catalog(tools: Vec<Tool>) -> Catalog {
    Catalog::new(tools, Vec::new(), Vec::new(), Vec::new()).unwrap()
}

#[test]
fn score_value_adds_weighted_points() {
    let scorer = WeightedScorer::default();
    let tool = make_tool("a", &["x", "y"], &["AI chat", "Code search"], 4.0);

    let profile = PreferenceProfile {
        categories: vec![CategoryId::from("x"), CategoryId::from("y")],
        features: vec!["chat".to_string()],
        pricing_models: vec![PricingModel::Freemium],
        previously_viewed: Vec::new(),
    };

    let details = scorer.score(&tool, &profile);
    assert_eq!(details.category_matches, 2);
    assert_eq!(details.feature_matches, 1, "substring match is case-insensitive");
    assert!(details.pricing_match);
    assert!(!details.previously_viewed);

    // 2 categories * 2 + 1 feature * 1 + 1 pricing = 6
    assert_eq!(scorer.score_value(&details), 6);
}

#[test]
fn viewed_tools_are_penalized() {
    let scorer = WeightedScorer::default();
    let tool = make_tool("a", &["x"], &[], 4.0);

    let fresh = PreferenceProfile {
        categories: vec![CategoryId::from("x")],
        ..Default::default()
    };
    let viewed = PreferenceProfile {
        previously_viewed: vec![ToolId::from("a")],
        ..fresh.clone()
    };

    let fresh_score = scorer.score_value(&scorer.score(&tool, &fresh));
    let viewed_score = scorer.score_value(&scorer.score(&tool, &viewed));
    assert_eq!(fresh_score, 2);
    assert_eq!(viewed_score, -1, "viewing history only ever subtracts");
    assert!(viewed_score < fresh_score);
}

#[test]
fn scoring_is_monotonic_in_matching_categories() {
    let scorer = WeightedScorer::default();
    let tool = make_tool("a", &["x", "y"], &["chat"], 4.0);

    let base = PreferenceProfile {
        categories: vec![CategoryId::from("x")],
        features: vec!["chat".to_string()],
        ..Default::default()
    };
    let extended = PreferenceProfile {
        categories: vec![CategoryId::from("x"), CategoryId::from("y")],
        ..base.clone()
    };

    let base_score = scorer.score_value(&scorer.score(&tool, &base));
    let extended_score = scorer.score_value(&scorer.score(&tool, &extended));
    assert!(
        extended_score >= base_score,
        "adding a matching category can only raise or hold the score"
    );
}

#[test]
fn recommend_ranks_by_score_and_caps_at_limit() {
    let catalog = make_catalog(vec![
        make_tool("a", &["x"], &[], 4.0),
        make_tool("b", &["x", "y"], &[], 3.0),
        make_tool("c", &[], &[], 5.0),
        make_tool("d", &["y"], &[], 2.0),
        make_tool("e", &[], &[], 1.0),
    ]);
    let profile = PreferenceProfile {
        categories: vec![CategoryId::from("x"), CategoryId::from("y")],
        ..Default::default()
    };

    let recommender = Recommender::default();
    let top = recommender.recommend(&catalog, &profile, DEFAULT_LIMIT);

    let ids: Vec<&str> = top.iter().map(|r| r.tool.id.as_str()).collect();
    // b matches both categories (4 points), a and d one each (2), c none.
    assert_eq!(ids, vec!["b", "a", "d", "c"]);
    assert_eq!(top[0].score, 4);
    assert_eq!(top.len(), DEFAULT_LIMIT);
    assert!(top[0].why.is_some(), "personalized results carry a breakdown");
}

#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = make_catalog(vec![
        make_tool("first", &["x"], &[], 1.0),
        make_tool("second", &["x"], &[], 5.0),
    ]);
    let profile = PreferenceProfile {
        categories: vec![CategoryId::from("x")],
        ..Default::default()
    };

    let top = Recommender::default().recommend(&catalog, &profile, 2);
    assert_eq!(top[0].tool.id.as_str(), "first");
    assert_eq!(top[1].tool.id.as_str(), "second");
}

#[test]
fn no_signal_profile_falls_back_to_rating_order() {
    let catalog = make_catalog(vec![
        make_tool("a", &["x"], &[], 4.0),
        make_tool("b", &["y"], &[], 4.8),
        make_tool("c", &["z"], &[], 3.0),
    ]);

    let top = Recommender::default().recommend(&catalog, &PreferenceProfile::default(), 3);
    let ids: Vec<&str> = top.iter().map(|r| r.tool.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert!(top[0].why.is_none(), "fallback results carry no breakdown");
}

#[test]
fn pricing_preference_alone_is_not_signal() {
    let catalog = make_catalog(vec![
        make_tool("low", &[], &[], 2.0),
        make_tool("high", &[], &[], 5.0),
    ]);
    let profile = PreferenceProfile {
        pricing_models: vec![PricingModel::Freemium],
        ..Default::default()
    };

    let top = Recommender::default().recommend(&catalog, &profile, 2);
    assert_eq!(top[0].tool.id.as_str(), "high", "rating fallback applies");
    assert!(top[0].why.is_none());
}

#[test]
fn trending_mode_filters_flagged_tools_in_catalog_order() {
    let mut a = make_tool("a", &[], &[], 4.0);
    a.is_trending = true;
    let b = make_tool("b", &[], &[], 5.0);
    let mut c = make_tool("c", &[], &[], 1.0);
    c.is_trending = true;
    let catalog = make_catalog(vec![a, b, c]);

    let ranked = Recommender::default().rank(
        &catalog,
        RankMode::Trending,
        &PreferenceProfile::default(),
        DEFAULT_LIMIT,
    );
    let ids: Vec<&str> = ranked.iter().map(|r| r.tool.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn new_mode_sorts_by_creation_date() {
    let mut old = make_tool("old", &[], &[], 5.0);
    old.created_at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let mut fresh = make_tool("fresh", &[], &[], 1.0);
    fresh.created_at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let catalog = make_catalog(vec![old, fresh]);

    let ranked = Recommender::default().rank(
        &catalog,
        RankMode::New,
        &PreferenceProfile::default(),
        DEFAULT_LIMIT,
    );
    let ids: Vec<&str> = ranked.iter().map(|r| r.tool.id.as_str()).collect();
    assert_eq!(ids, vec!["fresh", "old"]);
}

#[test]
fn viewed_tool_never_ranks_higher_than_without_the_entry() {
    let catalog = make_catalog(vec![
        make_tool("a", &["x"], &[], 4.0),
        make_tool("b", &["x"], &[], 4.0),
    ]);
    let base = PreferenceProfile {
        categories: vec![CategoryId::from("x")],
        ..Default::default()
    };
    let with_viewed = PreferenceProfile {
        previously_viewed: vec![ToolId::from("a")],
        ..base.clone()
    };

    let recommender = Recommender::default();
    let rank_of = |results: &[catalog_core::recommend::RankedTool<'_>], id: &str| {
        results.iter().position(|r| r.tool.id.as_str() == id).unwrap()
    };

    let before = recommender.recommend(&catalog, &base, 2);
    let after = recommender.recommend(&catalog, &with_viewed, 2);
    assert!(rank_of(&after, "a") >= rank_of(&before, "a"));
}
