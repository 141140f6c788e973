//! CLI administration tool for brewtrack.
//!
//! Provides commands for managing users and bearer tokens, and performing
//! database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new user
//! cargo run --bin admin -- user create
//!
//! # Create a personal access token for a user
//! cargo run --bin admin -- token create --email brewer@example.com --scope write-temperatures
//!
//! # List a user's tokens
//! cargo run --bin admin -- token list --email brewer@example.com
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke --email brewer@example.com <token-id>
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BCRYPT_COST` (optional): password hashing cost for `user create`
//!
//! # Features
//!
//! - **User Management**: Create accounts with bcrypt-hashed passwords
//! - **Token Management**: Mint, list, and revoke bearer tokens
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use brewtrack::application::services::{AuthService, hash_password};
use brewtrack::domain::entities::{NewUser, TokenKind, TokenScope};
use brewtrack::domain::repositories::UserRepository;
use brewtrack::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// CLI tool for managing brewtrack.
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

    /// Manage bearer tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

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
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Mint a new personal access token
    Create {
        /// Email of the owning user
        #[arg(short, long)]
        email: String,

        /// Token scope
        #[arg(short, long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List a user's tokens
    List {
        /// Email of the owning user
        #[arg(short, long)]
        email: String,
    },

    /// Revoke a token
    Revoke {
        /// Email of the owning user
        #[arg(short, long)]
        email: String,

        /// Token id to revoke
        token_id: Uuid,
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

/// Token scopes as CLI-friendly names.
#[derive(Copy, Clone, ValueEnum)]
enum ScopeArg {
    All,
    ReadAll,
    WriteTemperatures,
    ReadTemperatures,
}

impl From<ScopeArg> for TokenScope {
    fn from(s: ScopeArg) -> Self {
        match s {
            ScopeArg::All => TokenScope::All,
            ScopeArg::ReadAll => TokenScope::ReadAll,
            ScopeArg::WriteTemperatures => TokenScope::WriteTemperatures,
            ScopeArg::ReadTemperatures => TokenScope::ReadTemperatures,
        }
    }
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
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn auth_service(pool: &PgPool) -> AuthService {
    let pool = Arc::new(pool.clone());
    AuthService::new(
        Arc::new(PgTokenRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        None,
    )
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::Create { email, username } => create_user(pool, email, username).await?,
    }
    Ok(())
}

/// Creates a new user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email, username, and full name (or use provided)
/// 2. Prompt for password with confirmation
/// 3. Hash password with bcrypt (`BCRYPT_COST`, default 13)
/// 4. Store in database
async fn create_user(pool: &PgPool, email: Option<String>, username: Option<String>) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let full_name: String = Input::new()
        .with_prompt("Full name")
        .allow_empty(true)
        .interact_text()?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(13);

    let password_hash =
        hash_password(&password, cost).map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?;

    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    let user = repo
        .create(NewUser {
            email,
            username,
            full_name,
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  Email:    {}", user.email.cyan());
    println!("  Username: {}", user.username.cyan());
    println!("  Id:       {}", user.uuid.to_string().bright_black());
    println!();

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    match action {
        TokenAction::Create { email, scope, yes } => {
            create_token(pool, email, scope.into(), yes).await?;
        }
        TokenAction::List { email } => {
            list_tokens(pool, email).await?;
        }
        TokenAction::Revoke { email, token_id } => {
            revoke_token(pool, email, token_id).await?;
        }
    }

    Ok(())
}

async fn find_user_id(pool: &PgPool, email: &str) -> Result<i64> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    let user = repo
        .find_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;
    Ok(user.id)
}

/// Mints a personal access token with interactive confirmation.
///
/// # Security
///
/// - Only the SHA-512 digest of the secret is stored in the database
/// - The wire credential is displayed once and cannot be retrieved later
async fn create_token(pool: &PgPool, email: String, scope: TokenScope, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔑 Create Bearer Token".bright_blue().bold());
    println!();

    let user_id = find_user_id(pool, &email).await?;

    println!("  Owner: {}", email.cyan());
    println!("  Scope: {:?}", scope);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = auth_service(pool);
    let issued = service
        .issue_token(user_id, scope, TokenKind::PersonalAccess, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        issued.wire_token().bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/v1/batches",
        issued.wire_token().bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists a user's tokens with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Bearer Tokens
///
///   Id                                    Scope             Kind             Created           Status
///   ────────────────────────────────────────────────────────────────────────────────────────────────
///   4b4ef407-914a-42f9-8fd8-3a2a433cbbbf  ALL               LOGIN            2026-08-15 10:30  ACTIVE
/// ```
async fn list_tokens(pool: &PgPool, email: String) -> Result<()> {
    println!("{}", "📋 Bearer Tokens".bright_blue().bold());
    println!();

    let user_id = find_user_id(pool, &email).await?;

    let service = auth_service(pool);
    let tokens = service
        .list_tokens(user_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<38} {:<18} {:<16} {:<17} {:<10}",
        "Id".bright_white().bold(),
        "Scope".bright_white().bold(),
        "Kind".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    let now = chrono::Utc::now();
    for token in &tokens {
        let status = if token.is_expired(now) {
            "EXPIRED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<38} {:<18} {:<16} {:<17} {}",
            token.id.to_string().bright_black(),
            format!("{:?}", token.scope).cyan(),
            format!("{:?}", token.kind).cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No)
async fn revoke_token(pool: &PgPool, email: String, token_id: Uuid) -> Result<()> {
    println!("{}", "🔒 Revoke Bearer Token".bright_blue().bold());
    println!();

    let user_id = find_user_id(pool, &email).await?;

    println!("  Token: {}", token_id.to_string().cyan());
    println!("  Owner: {}", email.bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let service = auth_service(pool);
    service
        .revoke_token(user_id, token_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
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
