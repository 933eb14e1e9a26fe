//! Plain-text rendering of widget state.

use shelfchat_catalog::FilterView;
use shelfchat_core::product::Product;
use shelfchat_selection::{SelectedChip, SelectionStore};

pub const AWAITING_CATEGORY: &str = "Select a category to view products";
pub const NO_RESULTS: &str = "No products match your filters";
pub const NOTHING_SELECTED: &str = "No products selected";
pub const GENERATING_ROUTINE: &str = "Generating your personalized routine...";

/// One product card; `[x]` marks a selected product.
pub fn product_card(product: &Product, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    format!(
        "{marker} #{id} {name}\n    {brand} · {category}\n    {description}",
        id = product.id,
        name = product.name,
        brand = product.brand,
        category = product.category,
        description = product.description,
    )
}

pub fn filter_view(view: &FilterView, selection: &SelectionStore) -> String {
    match view {
        FilterView::AwaitingCategory => AWAITING_CATEGORY.to_string(),
        FilterView::NoResults => NO_RESULTS.to_string(),
        FilterView::Products(products) => products
            .iter()
            .map(|p| product_card(p, selection.contains(p.id)))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

pub fn chips(chips: &[SelectedChip]) -> String {
    if chips.is_empty() {
        return NOTHING_SELECTED.to_string();
    }
    chips
        .iter()
        .map(|c| format!("  • {} (#{})", c.label, c.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix each line of an assistant reply.
pub fn assistant_reply(text: &str) -> String {
    text.lines()
        .map(|line| format!("  Assistant > {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfchat_core::product::ProductId;
    use shelfchat_storage::InMemoryStore;
    use std::sync::Arc;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.into(),
            brand: "CeraVe".into(),
            category: "moisturizer".into(),
            description: "Daily lotion".into(),
            image: String::new(),
        }
    }

    #[test]
    fn card_marks_selection() {
        let card = product_card(&product(3, "Lotion"), true);
        assert!(card.starts_with("[x] #3 Lotion"));
        assert!(card.contains("CeraVe · moisturizer"));

        assert!(product_card(&product(3, "Lotion"), false).starts_with("[ ]"));
    }

    #[test]
    fn filter_view_messages() {
        let selection = SelectionStore::new(Arc::new(InMemoryStore::new()));
        assert_eq!(
            filter_view(&FilterView::AwaitingCategory, &selection),
            AWAITING_CATEGORY
        );
        assert_eq!(filter_view(&FilterView::NoResults, &selection), NO_RESULTS);
    }

    #[test]
    fn filter_view_lists_cards_with_markers() {
        let mut selection = SelectionStore::new(Arc::new(InMemoryStore::new()));
        selection.toggle(ProductId(2));

        let view = FilterView::Products(vec![product(1, "A"), product(2, "B")]);
        let out = filter_view(&view, &selection);
        assert!(out.contains("[ ] #1 A"));
        assert!(out.contains("[x] #2 B"));
    }

    #[test]
    fn empty_chip_list_shows_placeholder() {
        assert_eq!(chips(&[]), NOTHING_SELECTED);

        let out = chips(&[SelectedChip {
            id: ProductId(999),
            label: "Product 999".into(),
            known: false,
        }]);
        assert_eq!(out, "  • Product 999 (#999)");
    }

    #[test]
    fn reply_lines_are_prefixed() {
        assert_eq!(
            assistant_reply("AM: cleanse\nPM: moisturize"),
            "  Assistant > AM: cleanse\n  Assistant > PM: moisturize"
        );
    }
}
