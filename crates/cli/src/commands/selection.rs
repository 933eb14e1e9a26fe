//! `shelfchat toggle | clear | selected` — Selection management.

use crate::{render, widget};
use shelfchat_core::Result;
use shelfchat_core::product::ProductId;
use std::path::Path;

pub async fn toggle(config_path: Option<&Path>, id: u64) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let mut widget = widget::Widget::from_config(&config);
    widget.load_catalog_or_empty().await;

    let id = ProductId(id);
    let selected = widget.selection.toggle(id);
    let product = widget.selection.resolve(id, &widget.catalog.products());
    if selected {
        println!("  Selected {} (#{id})", product.name);
    } else {
        println!("  Deselected {} (#{id})", product.name);
    }

    print_selected(&widget);
    Ok(())
}

pub async fn clear(config_path: Option<&Path>) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let mut widget = widget::Widget::from_config(&config);

    widget.selection.clear();
    println!("  Selection cleared");
    Ok(())
}

pub async fn show(config_path: Option<&Path>) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let widget = widget::Widget::from_config(&config);
    widget.load_catalog_or_empty().await;

    print_selected(&widget);
    Ok(())
}

fn print_selected(widget: &widget::Widget) {
    let chips = widget.selection.chips(&widget.catalog.products());
    println!();
    println!("  Selected products:");
    println!("{}", render::chips(&chips));
}
