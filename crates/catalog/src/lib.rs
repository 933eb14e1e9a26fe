//! Catalog loading and filtering for ShelfChat.
//!
//! - [`CatalogLoader`] fetches `{products: [...]}` from a [`CatalogSource`]
//!   and owns the cached product list.
//! - [`filter`] turns a category and a search term into a product sub-sequence.

pub mod source;
pub mod loader;
pub mod filter;

pub use source::{CatalogSource, FileCatalogSource, HttpCatalogSource};
pub use loader::{CatalogDocument, CatalogLoader};
pub use filter::{FilterState, FilterView, apply};
