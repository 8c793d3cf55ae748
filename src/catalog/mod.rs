pub mod loader;
pub mod store;

pub use loader::CatalogLoadError;
pub use store::{Catalog, CatalogError};
