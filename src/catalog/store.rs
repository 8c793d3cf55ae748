// The store is intentionally thin:
// no mutation after construction
// derived aggregates recomputed once, up front
// runtime reads only

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::types::{BlogPost, Category, CategoryId, Review, Tool, ToolId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate tool ID: {0}")]
    DuplicateToolId(String),
    #[error("Duplicate category ID: {0}")]
    DuplicateCategoryId(String),
}

/// The full immutable collection of records available to the engines.
///
/// Constructed once per process lifetime; every engine operates on borrowed
/// slices of it. Nothing here is ever written after `new` returns, so shared
/// access across threads needs no synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
    reviews: Vec<Review>,
    blog_posts: Vec<BlogPost>,
}

impl Catalog {
    /// Build a catalog from already-deserialized records.
    ///
    /// Duplicate tool or category ids are rejected. Derived aggregates are
    /// normalized here rather than trusted from the input: every
    /// `Category.tool_count` is overwritten with the actual referencing-tool
    /// count, and for each tool with at least one attached review,
    /// `average_rating` and `review_count` are recomputed from those
    /// reviews. Tools with no attached reviews keep their stored aggregate
    /// since the review feed may be partial.
    pub fn new(
        tools: Vec<Tool>,
        categories: Vec<Category>,
        reviews: Vec<Review>,
        blog_posts: Vec<BlogPost>,
    ) -> Result<Self, CatalogError> {
        let mut seen_tools = BTreeSet::new();
        for tool in &tools {
            if !seen_tools.insert(tool.id.clone()) {
                return Err(CatalogError::DuplicateToolId(tool.id.as_str().to_string()));
            }
        }

        let mut seen_categories = BTreeSet::new();
        for category in &categories {
            if !seen_categories.insert(category.id.clone()) {
                return Err(CatalogError::DuplicateCategoryId(
                    category.id.as_str().to_string(),
                ));
            }
        }

        let mut catalog = Catalog {
            tools,
            categories,
            reviews,
            blog_posts,
        };
        catalog.recompute_aggregates();
        Ok(catalog)
    }

    fn recompute_aggregates(&mut self) {
        let mut per_tool: BTreeMap<&ToolId, (f64, usize)> = BTreeMap::new();
        for review in &self.reviews {
            let entry = per_tool.entry(&review.tool_id).or_insert((0.0, 0));
            entry.0 += review.rating;
            entry.1 += 1;
        }
        let per_tool: BTreeMap<ToolId, (f64, usize)> = per_tool
            .into_iter()
            .map(|(id, acc)| (id.clone(), acc))
            .collect();

        for tool in &mut self.tools {
            if let Some((sum, count)) = per_tool.get(&tool.id) {
                tool.average_rating = sum / *count as f64;
                tool.review_count = *count;
            }
        }

        for category in &mut self.categories {
            category.tool_count = self
                .tools
                .iter()
                .filter(|tool| tool.in_category(&category.id))
                .count();
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn tool_by_id(&self, id: &ToolId) -> Option<&Tool> {
        self.tools.iter().find(|tool| &tool.id == id)
    }

    pub fn tool_by_slug(&self, slug: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.slug == slug)
    }

    /// Resolve a comparison picker's id list, preserving catalog order and
    /// skipping ids that resolve to nothing.
    pub fn tools_by_ids(&self, ids: &[ToolId]) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|tool| ids.contains(&tool.id))
            .collect()
    }

    pub fn tools_in_category(&self, category: &CategoryId) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|tool| tool.in_category(category))
            .collect()
    }

    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| tool.is_featured).collect()
    }

    pub fn trending_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| tool.is_trending).collect()
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    pub fn reviews_for(&self, tool: &ToolId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| &review.tool_id == tool)
            .collect()
    }

    pub fn blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|post| post.slug == slug)
    }

    pub fn featured_blog_posts(&self) -> Vec<&BlogPost> {
        self.blog_posts
            .iter()
            .filter(|post| post.is_featured)
            .collect()
    }
}
