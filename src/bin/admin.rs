//! CLI administration tool for tiny-url.
//!
//! Inspects and creates short links directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a mapping (does not count as a visit)
//! cargo run --bin admin -- link show aB3_x-9
//!
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com/page
//!
//! # View statistics
//! cargo run --bin admin -- stats --top 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`), plus
//! `BASE_URL` for printing full short links.

use tiny_url::application::services::{ShortenerError, ShortenerService};
use tiny_url::config::Config;
use tiny_url::domain::repositories::MappingStore;
use tiny_url::infrastructure::persistence::PgMappingStore;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tiny-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect or create short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats {
        /// Number of most visited links to list
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        top: u32,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a mapping by short code
    Show {
        /// Short code
        code: String,
    },

    /// Shorten a URL (returns the existing code if already shortened)
    Create {
        /// Original URL
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(sqlx::FromRow)]
struct TopLink {
    short_code: String,
    original_url: String,
    clicks: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats { top } => handle_stats(&pool, top).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands through the shortener service.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let store = Arc::new(PgMappingStore::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(store, config.shortener_settings());

    match action {
        LinkAction::Show { code } => match service.stats(&code).await {
            Ok(mapping) => {
                println!("{}", "🔗 Short link".bright_blue().bold());
                println!();
                println!("  {} {}", "Code:".bold(), mapping.short_code.cyan());
                println!("  {} {}", "Short URL:".bold(), service.short_url(&mapping.short_code));
                println!("  {} {}", "Original URL:".bold(), mapping.original_url);
                println!("  {} {}", "Clicks:".bold(), mapping.clicks.to_string().green());
                println!("  {} {}", "Created:".bold(), format_time(mapping.created_at));
            }
            Err(ShortenerError::NotFound { code }) => {
                println!("{} No link with code '{}'", "✗".red(), code);
            }
            Err(e) => return Err(e.into()),
        },
        LinkAction::Create { url } => {
            let shortened = service.shorten(&url).await?;

            if shortened.created {
                println!("{} Created short link", "✓".green());
            } else {
                println!("{} URL was already shortened", "ℹ".yellow());
            }
            println!();
            println!("  {} {}", "Code:".bold(), shortened.short_code.cyan());
            println!("  {} {}", "Short URL:".bold(), shortened.short_url);
            println!("  {} {}", "Original URL:".bold(), shortened.original_url);
        }
    }

    Ok(())
}

/// Prints totals and the most visited links.
async fn handle_stats(pool: &PgPool, top: u32) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let store = PgMappingStore::new(Arc::new(pool.clone()));
    let links = store.count().await?;

    let total_clicks: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM url_mappings")
            .fetch_one(pool)
            .await?;

    println!("  {} {}", "Links:".bold(), links.to_string().cyan());
    println!("  {} {}", "Clicks:".bold(), total_clicks.to_string().cyan());

    let top_links = sqlx::query_as::<_, TopLink>(
        r#"
        SELECT short_code, original_url, clicks
        FROM url_mappings
        ORDER BY clicks DESC, created_at ASC
        LIMIT $1
        "#,
    )
    .bind(i64::from(top))
    .fetch_all(pool)
    .await?;

    if top_links.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Most visited:".bold());
    for link in top_links {
        println!(
            "  {:>8}  {}  {}",
            link.clicks.to_string().green(),
            link.short_code.cyan(),
            link.original_url.dimmed()
        );
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1").execute(pool).await?;
            println!("{} Database connection OK", "✓".green());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let size: String =
                sqlx::query_scalar("SELECT pg_size_pretty(pg_database_size(current_database()))")
                    .fetch_one(pool)
                    .await?;

            println!("{}", "🗄  Database".bright_blue().bold());
            println!();
            println!("  {} {}", "Version:".bold(), version);
            println!("  {} {}", "Size:".bold(), size);
        }
    }

    Ok(())
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stats_top_must_be_positive() {
        assert!(Cli::try_parse_from(["admin", "stats", "--top", "-1"]).is_err());
        assert!(Cli::try_parse_from(["admin", "stats", "--top", "0"]).is_err());

        let cli = Cli::try_parse_from(["admin", "stats", "--top", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { top: 3 }));
    }

    #[test]
    fn test_stats_top_defaults_to_ten() {
        let cli = Cli::try_parse_from(["admin", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { top: 10 }));
    }
}
