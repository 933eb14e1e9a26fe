//! Filter engine — category and free-text search over the catalog.
//!
//! Both predicates are pure and compose by intersection, so the result is
//! a stable sub-sequence of the input regardless of evaluation order.

use shelfchat_core::product::Product;

/// Keep products matching `category` (exact, case-sensitive) and whose
/// name, brand or description contains `search_term` (case-insensitive).
/// An empty argument disables its predicate.
pub fn apply(products: &[Product], category: &str, search_term: &str) -> Vec<Product> {
    let needle = search_term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| needle.is_empty() || p.search_text().contains(&needle))
        .cloned()
        .collect()
}

/// Transient filter input, normalized on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    category: Option<String>,
    search_term: String,
}

/// What the render layer should show for the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterView {
    /// Nothing chosen yet: show the "select a category" placeholder.
    AwaitingCategory,
    /// A filter is active but nothing matched.
    NoResults,
    Products(Vec<Product>),
}

impl FilterState {
    /// Blank category means "none"; the search term is trimmed and lower-cased.
    pub fn new(category: Option<&str>, search_term: &str) -> Self {
        Self {
            category: normalize_category(category),
            search_term: search_term.trim().to_lowercase(),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize_category(category);
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.trim().to_lowercase();
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search_term.is_empty()
    }

    /// Run the filter and classify the outcome for rendering.
    pub fn evaluate(&self, products: &[Product]) -> FilterView {
        if self.is_empty() {
            return FilterView::AwaitingCategory;
        }

        let matched = apply(products, self.category().unwrap_or(""), &self.search_term);
        if matched.is_empty() {
            FilterView::NoResults
        } else {
            FilterView::Products(matched)
        }
    }
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category.filter(|c| !c.trim().is_empty()).map(str::to_string)
}
