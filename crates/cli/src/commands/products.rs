//! `shelfchat products` — Filtered product listing.

use crate::{render, widget};
use shelfchat_core::Result;
use shelfchat_catalog::FilterState;
use std::path::Path;

pub async fn run(
    config_path: Option<&Path>,
    category: Option<&str>,
    search: &str,
) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let widget = widget::Widget::from_config(&config);
    widget.load_catalog().await?;

    let view = FilterState::new(category, search).evaluate(&widget.catalog.products());
    println!("{}", render::filter_view(&view, &widget.selection));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfchat_core::{Error, FetchError};

    #[tokio::test]
    async fn missing_catalog_is_reported_not_rendered_as_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!(
                "[catalog]\nsource = {catalog:?}\n\n[storage]\nbackend = \"memory\"\n",
                catalog = dir.path().join("missing.json").display().to_string(),
            ),
        )
        .unwrap();

        let err = run(Some(config_path.as_path()), Some("skincare"), "")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(FetchError::Io(_))));
    }
}
