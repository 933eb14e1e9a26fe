//! `shelfchat init` — Write a starter config file.

use shelfchat_config::AppConfig;
use shelfchat_core::Result;
use std::path::Path;

pub async fn run(path: Option<&Path>) -> Result<()> {
    let default_path = AppConfig::default_path();
    let config_path = path.unwrap_or(&default_path);

    if config_path.exists() {
        println!("  Config file already exists: {}", config_path.display());
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(config_path, AppConfig::default_toml())?;
    println!("  Created config file: {}", config_path.display());
    println!("  Point catalog.source at your products.json and assistant.endpoint at your worker.");

    Ok(())
}
