//! parts-price - PC part price lookup CLI
//!
//! Cheapest kakaku.com listing, inferred specs, and name suggestions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parts_price::category::Category;
use parts_price::commands::api::render;
use parts_price::commands::{ApiCommand, Endpoint, SearchCommand, SuggestCommand};
use parts_price::config::{Config, OutputFormat};
use parts_price::format::Formatter;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "parts-price",
    version,
    about = "Lowest-price and spec lookup for PC parts",
    long_about = "Finds the cheapest kakaku.com listing for a PC part, infers its specs from the listing name, and suggests product names per category."
)]
struct Cli {
    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Request timeout for kakaku.com in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the lowest price for a product
    #[command(alias = "s")]
    Search {
        /// Product name
        name: String,

        /// Part category, enables spec inference
        #[arg(long)]
        category: Option<Category>,
    },

    /// Suggest product names for a category
    Suggest {
        /// Part category
        category: String,

        /// Partial product name; fewer than 2 characters lists popular items
        #[arg(default_value = "")]
        query: String,
    },

    /// List supported categories
    Categories,

    /// Run an API handler on a JSON body and print the reply
    Api {
        /// Endpoint to call
        endpoint: Endpoint,

        /// JSON request body; read from stdin when omitted
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Search { name, category } => {
            let output = SearchCommand::new(config).execute(&name, category).await?;
            println!("{}", output);
        }

        Commands::Suggest { category, query } => {
            let output = SuggestCommand::new(config).execute(&category, &query).await?;
            println!("{}", output);
        }

        Commands::Categories => {
            println!("{}", Formatter::new(config.format).format_categories(Category::all()));
        }

        Commands::Api { endpoint, body } => {
            let body = match body {
                Some(body) => body,
                None => {
                    let mut body = String::new();
                    std::io::stdin()
                        .read_to_string(&mut body)
                        .context("Failed to read request body from stdin")?;
                    body
                }
            };

            let reply = ApiCommand::new(config).execute(endpoint, &body).await?;
            println!("{}", render(&reply));
        }
    }

    Ok(())
}
