//! `shelfchat categories` — List catalog categories.

use crate::widget;
use shelfchat_core::Result;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let widget = widget::Widget::from_config(&config);
    widget.load_catalog().await?;

    for category in widget.catalog.categories() {
        println!("  {category}");
    }

    Ok(())
}
