//! Product domain types.
//!
//! Products are immutable once loaded. The catalog loader owns them;
//! everything else reads.

use serde::{Deserialize, Serialize};

/// Stable, unique product identifier as it appears in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    /// Image URI
    pub image: String,
}

impl Product {
    /// Synthesized stand-in for an id the catalog does not know.
    ///
    /// Only the id and the `"Product {id}"` label are meaningful.
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            name: format!("Product {id}"),
            brand: String::new(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Lower-cased concatenation of the searchable fields.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.brand, self.description).to_lowercase()
    }
}
