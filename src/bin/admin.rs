//! CLI administration tool for the microblog service.
//!
//! Provides commands for managing users, revoking access tokens, and
//! performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user account
//! cargo run --bin admin -- user create
//!
//! # List registered users
//! cargo run --bin admin -- user list
//!
//! # Force a user out of every session
//! cargo run --bin admin -- token revoke --user-id 3
//!
//! # Revoke every live token in the system
//! cargo run --bin admin -- token revoke --all
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
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **User Management**: Create and list accounts, with generated passwords
//! - **Token Management**: Revoke access tokens per user or globally
//! - **Statistics**: View user, post and subscription counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use microblog::api::dto::signup::SignupRequest;
use microblog::application::services::UserService;
use microblog::domain::repositories::{TokenRepository, UserRepository};
use microblog::error::AppError;
use microblog::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the microblog service.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: Option<String>,

        /// Password (optional, auto-generated if not provided)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all registered users
    List,
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Revoke live access tokens
    Revoke {
        /// Revoke every live token belonging to this user
        #[arg(long, conflicts_with = "all")]
        user_id: Option<i64>,

        /// Revoke every live token in the system
        #[arg(long)]
        all: bool,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::Create {
            name,
            email,
            password,
            yes,
        } => {
            create_user(pool, name, email, password, yes).await?;
        }
        UserAction::List => {
            list_users(pool).await?;
        }
    }

    Ok(())
}

/// Creates a new user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for name and email (or use provided flags)
/// 2. Generate random password or use provided value
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Run through the same validation as the signup endpoint
/// 5. Display the account and, if generated, the password
///
/// # Security
///
/// - Only the argon2 hash is stored in the database
/// - A generated password is displayed once and cannot be retrieved later
async fn create_user(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => {
            println!("{}", "✨ Generated a random password".green());
            (generate_password(), true)
        }
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  IMPORTANT: Save this password now! You won't be able to see it again."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(users);

    let request = SignupRequest {
        name: Some(name),
        email: Some(email),
        password: Some(password.clone()),
        password_confirmation: Some(password),
    };

    let user = match service.register(request).await {
        Ok(user) => user,
        Err(AppError::Validation { errors }) => {
            println!();
            println!("{}", "❌ Validation failed:".red().bold());
            if let Some(map) = serde_json::to_value(&errors)?.as_object() {
                for (field, messages) in map {
                    for message in messages.as_array().into_iter().flatten() {
                        println!(
                            "  {}: {}",
                            field.cyan(),
                            message.as_str().unwrap_or_default()
                        );
                    }
                }
            }
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create user: {}", e)),
    };

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("  ID:    {}", user.id.to_string().bright_white().bold());
    println!("  Email: {}", user.email.cyan());
    println!();

    Ok(())
}

/// Row shape for the user listing query.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Lists all registered users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Name                 Email                          Created
///   ─────────────────────────────────────────────────────────────────────
///   1   Alice                alice@example.com              2026-07-15 10:30
/// ```
async fn list_users(pool: &PgPool) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .context("Failed to list users")?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    match action {
        TokenAction::Revoke { user_id, all } => {
            revoke_tokens(pool, user_id, all).await?;
        }
    }

    Ok(())
}

/// Revokes live tokens for one user or for everyone.
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - Already-revoked tokens are left untouched
async fn revoke_tokens(pool: &PgPool, user_id: Option<i64>, all: bool) -> Result<()> {
    println!("{}", "🔒 Revoke Access Tokens".bright_blue().bold());
    println!();

    let revoked = match (user_id, all) {
        (Some(id), _) => {
            let confirmed = Confirm::new()
                .with_prompt(format!("Revoke every live token for user {}?", id))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            let repo = PgTokenRepository::new(Arc::new(pool.clone()));
            repo.revoke_all_for_user(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to revoke tokens: {}", e))?
        }
        (None, true) => {
            let confirmed = Confirm::new()
                .with_prompt("Revoke EVERY live token in the system?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            sqlx::query("UPDATE access_tokens SET revoked_at = NOW() WHERE revoked_at IS NULL")
                .execute(pool)
                .await
                .context("Failed to revoke tokens")?
                .rows_affected()
        }
        (None, false) => {
            anyhow::bail!("Pass either --user-id <ID> or --all");
        }
    };

    println!();
    println!(
        "{} {}",
        "✅ Tokens revoked:".green().bold(),
        revoked.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of users, posts and subscriptions
/// - Number of live access tokens
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let posts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    let subscriptions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_subscriptions")
        .fetch_one(pool)
        .await?;

    let tokens_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM access_tokens WHERE revoked_at IS NULL AND expires_at > NOW()",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Users:         {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Posts:         {}",
        posts_count.to_string().bright_green().bold()
    );
    println!(
        "  Subscriptions: {}",
        subscriptions_count.to_string().bright_green().bold()
    );
    println!(
        "  Live tokens:   {}",
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

/// Generates a random password for accounts created from the CLI.
///
/// # Format
///
/// - Length: 16 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 16;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
