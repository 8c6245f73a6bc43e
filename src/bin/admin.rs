//! CLI administration tool for foodgram.
//!
//! Inspects short codes, exports shopping lists, and performs database
//! maintenance without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Short code of a recipe id, and back
//! cargo run --bin admin -- code encode 1000
//! cargo run --bin admin -- code decode rs
//!
//! # Export a user's shopping list
//! cargo run --bin admin -- shopping-list --user 7 --output shopping_list.txt
//!
//! # Aggregate ingredient rows from a JSON file
//! cargo run --bin admin -- aggregate rows.json
//!
//! # Load the ingredient catalogue from CSV (`name,measurement_unit` rows)
//! cargo run --bin admin -- ingredients load data/ingredients.csv
//!
//! # Empty a user's shopping cart
//! cargo run --bin admin -- cart clear --user 7
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (database commands only)

use foodgram::application::services::{CollectionService, IngredientService, ShoppingListService};
use foodgram::application::services::short_link_service::SHORT_LINK_PREFIX;
use foodgram::config::mask_connection_string;
use foodgram::domain::entities::RecipeCollection;
use foodgram::domain::repositories::{CollectionRepository, IngredientRepository, RecipeRepository};
use foodgram::domain::shopping_list::{IngredientLine, ShoppingList};
use foodgram::infrastructure::persistence::{
    PgCollectionRepository, PgIngredientRepository, PgRecipeRepository, PgShoppingCartRepository,
};
use foodgram::utils::{ingredient_csv, short_code};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing foodgram.
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
    /// Encode or decode short link codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Print or save a user's shopping list
    ShoppingList {
        /// User whose cart is exported
        #[arg(short, long)]
        user: i64,

        /// Write the list to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Aggregate a JSON array of ingredient lines
    Aggregate {
        /// File with `[{"ingredient_name", "measurement_unit", "amount"}, ...]`
        file: PathBuf,
    },

    /// Ingredient catalogue maintenance
    Ingredients {
        #[command(subcommand)]
        action: IngredientAction,
    },

    /// Shopping cart maintenance
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short code subcommands.
#[derive(Subcommand)]
enum CodeAction {
    /// Recipe id to short code
    Encode {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Short code to recipe id
    Decode { code: String },
}

/// Ingredient catalogue subcommands.
#[derive(Subcommand)]
enum IngredientAction {
    /// Insert ingredients from a headerless `name,measurement_unit` CSV file
    Load { file: PathBuf },
}

/// Shopping cart subcommands.
#[derive(Subcommand)]
enum CartAction {
    /// Remove every recipe from a user's cart
    Clear {
        #[arg(short, long)]
        user: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Code { action } => handle_code_action(action)?,
        Commands::Aggregate { file } => handle_aggregate(&file)?,
        Commands::ShoppingList { user, output } => {
            let pool = connect().await?;
            handle_shopping_list(&pool, user, output).await?;
        }
        Commands::Ingredients { action } => handle_ingredient_action(action).await?,
        Commands::Cart { action } => {
            let pool = connect().await?;
            handle_cart_action(action, &pool).await?;
        }
        Commands::Stats => {
            let pool = connect().await?;
            handle_stats(&pool).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })
}

/// Converts between recipe ids and short codes.
fn handle_code_action(action: CodeAction) -> Result<()> {
    match action {
        CodeAction::Encode { id } => {
            let code = short_code::encode(id)?;
            println!("  Code: {}", code.bright_yellow().bold());
            println!("  Path: {}{}", SHORT_LINK_PREFIX, code.cyan());
        }
        CodeAction::Decode { code } => {
            let id = short_code::decode(&code)?;
            println!("  Recipe id: {}", id.to_string().bright_green().bold());
            println!("  Path:      /recipes/{}", id.to_string().cyan());
        }
    }

    Ok(())
}

/// Reads ingredient lines from a JSON file and prints the aggregated list.
fn handle_aggregate(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let lines: Vec<IngredientLine> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid ingredient lines in {}", file.display()))?;

    let list = ShoppingList::aggregate(lines);
    print_list(&list);

    Ok(())
}

/// Exports the shopping list of one user.
///
/// Without `--output` the list is printed; otherwise the exact download
/// body is written to the file.
async fn handle_shopping_list(pool: &PgPool, user: i64, output: Option<PathBuf>) -> Result<()> {
    let repo = Arc::new(PgShoppingCartRepository::new(Arc::new(pool.clone())));
    let service = ShoppingListService::new(repo);

    let list = service
        .build(user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build shopping list: {}", e))?;

    match output {
        Some(path) => {
            std::fs::write(&path, list.to_string())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {} ({} lines)",
                "✅ Shopping list saved to".green().bold(),
                path.display().to_string().cyan(),
                list.len()
            );
        }
        None => {
            println!(
                "{}",
                format!("🛒 Shopping list of user {}", user).bright_blue().bold()
            );
            println!();
            print_list(&list);
        }
    }

    Ok(())
}

fn print_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("{}", "  Shopping list is empty".yellow());
        return;
    }

    for line in list.lines() {
        println!("  {}", line);
    }
    println!();
    println!("  Total: {}", list.len().to_string().bright_white().bold());
}

/// Dispatches ingredient catalogue commands.
///
/// The file is parsed before connecting, so a malformed file never reaches
/// the database.
async fn handle_ingredient_action(action: IngredientAction) -> Result<()> {
    match action {
        IngredientAction::Load { file } => {
            println!("{}", "🥕 Load Ingredients".bright_blue().bold());
            println!();

            let reader = std::fs::File::open(&file)
                .with_context(|| format!("Ingredient file not found: {}", file.display()))?;
            let records = ingredient_csv::read_ingredients(reader)
                .with_context(|| format!("Invalid ingredient file {}", file.display()))?;

            println!("  File: {}", file.display().to_string().cyan());
            println!("  Rows: {}", records.len().to_string().bright_white());
            println!();

            let pool = connect().await?;
            let repo = Arc::new(PgIngredientRepository::new(Arc::new(pool)));
            let service = IngredientService::new(repo.clone());

            let summary = service
                .load(&records)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load ingredients: {}", e))?;
            let total = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count ingredients: {}", e))?;

            println!(
                "{} {}",
                "✅ Ingredients added:".green().bold(),
                summary.inserted.to_string().bright_white().bold()
            );
            println!(
                "  Already present: {}",
                summary.existing.to_string().yellow()
            );
            println!("  Catalogue size:  {}", total.to_string().bright_green());
            println!();
        }
    }

    Ok(())
}

/// Dispatches shopping cart commands.
async fn handle_cart_action(action: CartAction, pool: &PgPool) -> Result<()> {
    match action {
        CartAction::Clear { user, yes } => {
            let pool = Arc::new(pool.clone());
            let service = CollectionService::new(
                Arc::new(PgCollectionRepository::new(pool.clone())),
                Arc::new(PgRecipeRepository::new(pool)),
            );

            println!("{}", "🧹 Clear Shopping Cart".bright_blue().bold());
            println!();
            println!("  User: {}", user.to_string().cyan());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every recipe from this cart?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let removed = service
                .clear(RecipeCollection::ShoppingCart, user)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to clear cart: {}", e))?;

            println!();
            println!(
                "{} {}",
                "✅ Recipes removed:".green().bold(),
                removed.to_string().bright_white().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Displays recipe, favorites, cart and token counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let recipes = PgRecipeRepository::new(pool.clone());
    let collections = PgCollectionRepository::new(pool.clone());

    let recipes_count = recipes
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count recipes: {}", e))?;
    let favorites_count = collections
        .count(RecipeCollection::Favorites)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count favorites: {}", e))?;
    let cart_count = collections
        .count(RecipeCollection::ShoppingCart)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count cart entries: {}", e))?;

    let tokens_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM auth_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool.as_ref())
            .await?;

    println!(
        "  Recipes:       {}",
        recipes_count.to_string().bright_green().bold()
    );
    println!(
        "  Favorites:     {}",
        favorites_count.to_string().bright_green().bold()
    );
    println!(
        "  Cart entries:  {}",
        cart_count.to_string().bright_green().bold()
    );
    println!(
        "  Active tokens: {}",
        tokens_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_accepts_negative_id() {
        let cli = Cli::try_parse_from(["admin", "code", "encode", "-5"]).unwrap();

        assert!(matches!(
            cli.command,
            Commands::Code {
                action: CodeAction::Encode { id: -5 }
            }
        ));
    }

    #[test]
    fn test_encode_negative_id_is_rejected_by_encoder() {
        let result = handle_code_action(CodeAction::Encode { id: -5 });

        assert!(result.is_err());
    }

    #[test]
    fn test_ingredients_load_parses_path() {
        let cli = Cli::try_parse_from(["admin", "ingredients", "load", "data/ingredients.csv"])
            .unwrap();

        match cli.command {
            Commands::Ingredients {
                action: IngredientAction::Load { file },
            } => assert_eq!(file, PathBuf::from("data/ingredients.csv")),
            _ => panic!("expected ingredients load"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
