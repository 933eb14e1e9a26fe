//! `shelfchat routine` — Personalized routine for the current selection.

use crate::{render, widget};
use shelfchat_core::Result;
use shelfchat_session::ROUTINE_INTRO;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let widget = widget::Widget::from_config(&config);
    widget.load_catalog().await?;

    let products = widget.selection.selected_products(&widget.catalog.products());
    if !products.is_empty() {
        eprintln!("  {}", render::GENERATING_ROUTINE);
    }

    match widget.session.request_routine(&products).await {
        Ok(routine) => {
            println!("  {ROUTINE_INTRO}");
            println!();
            println!("{}", render::assistant_reply(&routine));
        }
        Err(e) => println!("  {}", e.user_message()),
    }

    Ok(())
}
