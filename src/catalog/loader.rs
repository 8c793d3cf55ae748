use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::catalog::store::{Catalog, CatalogError};
use crate::types::{BlogPost, Category, Review, Tool};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

fn read_json<T: DeserializeOwned>(root: &Path, file: &str) -> Result<Vec<T>, CatalogLoadError> {
    let f = fs::File::open(root.join(file)).map_err(|source| CatalogLoadError::Io {
        file: file.to_string(),
        source,
    })?;
    serde_json::from_reader(f).map_err(|source| CatalogLoadError::Malformed {
        file: file.to_string(),
        source,
    })
}

/// Like `read_json`, but a missing file yields an empty collection.
fn read_json_optional<T: DeserializeOwned>(
    root: &Path,
    file: &str,
) -> Result<Vec<T>, CatalogLoadError> {
    match fs::File::open(root.join(file)) {
        Ok(f) => serde_json::from_reader(f).map_err(|source| CatalogLoadError::Malformed {
            file: file.to_string(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(CatalogLoadError::Io {
            file: file.to_string(),
            source,
        }),
    }
}

impl Catalog {
    /// Load a catalog from a directory of static JSON data files.
    ///
    /// `tools.json` and `categories.json` are required; `reviews.json` and
    /// `blog-posts.json` default to empty when absent. Record sets pass
    /// through [`Catalog::new`], so derived aggregates are normalized on
    /// the way in.
    pub fn load_dir(root: &Path) -> Result<Self, CatalogLoadError> {
        let tools: Vec<Tool> = read_json(root, "tools.json")?;
        let categories: Vec<Category> = read_json(root, "categories.json")?;
        let reviews: Vec<Review> = read_json_optional(root, "reviews.json")?;
        let blog_posts: Vec<BlogPost> = read_json_optional(root, "blog-posts.json")?;

        debug!(
            tools = tools.len(),
            categories = categories.len(),
            reviews = reviews.len(),
            blog_posts = blog_posts.len(),
            "catalog loaded"
        );

        Ok(Catalog::new(tools, categories, reviews, blog_posts)?)
    }
}
