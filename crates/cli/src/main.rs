//! ShelfChat CLI — browse the catalog, pick products, talk to the assistant.
//!
//! Commands:
//! - `init`        — Write a starter config file
//! - `products`    — List products for a category and/or search term
//! - `categories`  — List catalog categories
//! - `toggle`      — Select or deselect a product
//! - `clear`       — Deselect everything
//! - `selected`    — Show the selected products
//! - `chat`        — Interactive chat or single-message mode
//! - `routine`     — Generate a routine for the selected products

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod render;
mod widget;

#[derive(Parser)]
#[command(
    name = "shelfchat",
    about = "ShelfChat — product selection and routine assistant",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (defaults to ~/.shelfchat/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init,

    /// List products matching a category and/or search term
    Products {
        /// Exact category name
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text matched against name, brand and description
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// List catalog categories
    Categories,

    /// Select a product, or deselect it if already selected
    Toggle {
        /// Product id
        id: u64,
    },

    /// Deselect all products
    Clear,

    /// Show the selected products
    Selected,

    /// Chat with the assistant
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Generate a personalized routine for the selected products
    Routine,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Init => commands::init::run(config_path).await?,
        Commands::Products { category, search } => {
            commands::products::run(config_path, category.as_deref(), &search).await?
        }
        Commands::Categories => commands::categories::run(config_path).await?,
        Commands::Toggle { id } => commands::selection::toggle(config_path, id).await?,
        Commands::Clear => commands::selection::clear(config_path).await?,
        Commands::Selected => commands::selection::show(config_path).await?,
        Commands::Chat { message } => commands::chat::run(config_path, message).await?,
        Commands::Routine => commands::routine::run(config_path).await?,
    }

    Ok(())
}
