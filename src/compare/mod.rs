//! Side-by-side comparison: feature union, grouped rows, and a boolean
//! presence matrix over a selected set of tools.

use serde::Serialize;

use crate::types::{Tool, ToolId};

/// A named group of comparison rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureGroup {
    pub name: String,
    pub features: Vec<String>,
}

/// One matrix row: a feature name and its presence flag per compared tool,
/// aligned with [`FeatureMatrix::columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub feature: String,
    pub presence: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeatureMatrix {
    pub columns: Vec<ToolId>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub feature_groups: Vec<FeatureGroup>,
    pub matrix: FeatureMatrix,
}

impl Comparison {
    /// Every distinct feature name across the compared tools, in the order
    /// the groups present them.
    pub fn feature_union(&self) -> Vec<&str> {
        self.feature_groups
            .iter()
            .flat_map(|group| group.features.iter().map(String::as_str))
            .collect()
    }
}

/// Build a comparison over the supplied tools.
///
/// The feature union is deduplicated in first-seen order, then split
/// positionally: the first half (rounded up) becomes "Core Features" and the
/// remainder "Advanced Features". The split is by position only — it carries
/// no semantic grouping. Presence is exact, case-sensitive feature
/// membership. Zero tools yield an empty union and an empty matrix.
pub fn build_comparison(tools: &[&Tool]) -> Comparison {
    let mut union: Vec<&str> = Vec::new();
    for tool in tools {
        for feature in &tool.features {
            if !union.iter().any(|seen| seen == feature) {
                union.push(feature);
            }
        }
    }

    let midpoint = union.len().div_ceil(2);
    let feature_groups = vec![
        FeatureGroup {
            name: "Core Features".to_string(),
            features: union[..midpoint].iter().map(|f| f.to_string()).collect(),
        },
        FeatureGroup {
            name: "Advanced Features".to_string(),
            features: union[midpoint..].iter().map(|f| f.to_string()).collect(),
        },
    ];

    let rows = union
        .iter()
        .map(|feature| MatrixRow {
            feature: feature.to_string(),
            presence: tools.iter().map(|tool| tool.has_feature(feature)).collect(),
        })
        .collect();

    Comparison {
        feature_groups,
        matrix: FeatureMatrix {
            columns: tools.iter().map(|tool| tool.id.clone()).collect(),
            rows,
        },
    }
}

/// The active comparison selection for one viewing session.
///
/// Explicit, short-lived state handed around by the caller; deliberately not
/// a process-wide global. Emptying the set is fine and produces the
/// degenerate (empty) comparison.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    tools: Vec<Tool>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool to the selection. Re-adding an already-selected id is a
    /// no-op.
    pub fn add(&mut self, tool: Tool) {
        if !self.tools.iter().any(|t| t.id == tool.id) {
            self.tools.push(tool);
        }
    }

    pub fn remove(&mut self, id: &ToolId) {
        self.tools.retain(|tool| &tool.id != id);
    }

    pub fn clear(&mut self) {
        self.tools.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn build(&self) -> Comparison {
        let refs: Vec<&Tool> = self.tools.iter().collect();
        build_comparison(&refs)
    }
}
