//! CLI administration tool for safelink-shortener.
//!
//! Works directly against PostgreSQL through the same [`LinkService`] the
//! HTTP server uses, so validation and uniqueness rules are identical.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a generated slug
//! cargo run --bin admin -- link create https://example.com
//!
//! # Create a link with a custom slug
//! cargo run --bin admin -- link create https://example.com --custom promo
//!
//! # Show a link and its click count
//! cargo run --bin admin -- link show promo
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `BASE_URL` - used to print short URLs (default: `http://localhost:3000`)

use safelink_shortener::application::services::LinkService;
use safelink_shortener::config::{Config, mask_connection_string};
use safelink_shortener::infrastructure::persistence::PgLinkRepository;
use safelink_shortener::server::run_migrations;
use safelink_shortener::AppError;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing safelink-shortener.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
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
    /// Create a short link
    Create {
        /// Target URL (http or https)
        target: String,

        /// Custom slug (letters and digits, at least 3 characters)
        #[arg(short, long)]
        custom: Option<String>,
    },

    /// Show a link without counting a click
    Show {
        /// Slug to look up
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = LinkService::new(repo, base_url);

    match action {
        LinkAction::Create { target, custom } => create_link(&service, target, custom).await,
        LinkAction::Show { slug } => show_link(&service, slug).await,
    }
}

async fn create_link(
    service: &LinkService<PgLinkRepository>,
    target: String,
    custom: Option<String>,
) -> Result<()> {
    match service.create_link(&target, custom).await {
        Ok(link) => {
            println!("{}", "Link created".green().bold());
            println!("  Slug:   {}", link.slug.cyan());
            println!("  Target: {}", link.target);
            println!("  Short:  {}", service.short_url(&link.slug).bright_yellow());
            Ok(())
        }
        Err(e @ (AppError::InvalidUrl(_) | AppError::InvalidSlug(_) | AppError::SlugTaken(_))) => {
            println!("{} {}", "Rejected:".red().bold(), e);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

async fn show_link(service: &LinkService<PgLinkRepository>, slug: String) -> Result<()> {
    match service.lookup(&slug).await {
        Ok(link) => {
            println!("{}", "Link".bright_blue().bold());
            println!("  Slug:    {}", link.slug.cyan());
            println!("  Target:  {}", link.target);
            println!("  Short:   {}", service.short_url(&link.slug));
            println!(
                "  Created: {}",
                link.created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
            println!("  Clicks:  {}", link.clicks.to_string().bright_white().bold());
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("{} {}", "No link with slug".yellow(), slug.cyan());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
            LinkService::new(repo, "")
                .ping()
                .await
                .context("Database ping failed")?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await
                .context("Database query failed")?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(&pool)
                .await
                .context("Links table is not available; run `admin db migrate`")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Server: {}", version.bright_black());
            println!("  Links:  {}", links);
        }
        DbAction::Migrate => {
            run_migrations(&pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
