//! CLI administration tool for table-reservations.
//!
//! Provides commands for loading the demo dataset, viewing reservation
//! statistics, and performing database checks without requiring HTTP API
//! access.
//!
//! # Usage
//!
//! ```bash
//! # Load the demo dataset (endorsements, users, restaurants, tables)
//! cargo run --bin admin -- seed
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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing table-reservations.
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
    /// Load the demo dataset (endorsements, users, restaurants, tables)
    Seed {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connectivity
    Check,
}

/// Seed endorsements: restaurant-side label paired with the user-side
/// restriction it certifies.
const ENDORSEMENTS: &[(&str, &str)] = &[
    ("Gluten-Free Options", "Gluten-Free"),
    ("Vegan-Friendly", "Vegan"),
    ("Vegetarian-Friendly", "Vegetarian"),
    ("Paleo-friendly", "Paleo"),
];

const RESTAURANTS: &[(&str, f64, f64)] = &[
    ("Lardo", 19.4153107, -99.1804722),
    ("Panadería Rosetta", 19.4153107, -99.1804722),
    ("Tetetlán", 19.4153107, -99.1804722),
    ("Falling Piano Brewing Co", 19.4153107, -99.1804722),
    ("u.to.pi.a", 19.4153107, -99.1804722),
    ("Bluth's Original Frozen Banana Stand", 19.4153107, -99.1804722),
];

const USERS: &[(&str, &str, f64, f64)] = &[
    ("Michael", "michael@sample.com", 19.4153107, -99.1804722),
    ("George Michael", "GeorgeMichael@sample.com", 19.3634215, -99.1671942),
    ("Lucile", "Lucile@sample.com", 19.3634215, -99.1769323),
    ("Gob", "Gob@sample.com", 19.3318331, -99.2078983),
    ("Tobias", "Tobias@sample.com", 19.4384214, -99.2036906),
    ("Maeby", "Maeby@sample.com", 19.4349474, -99.1419256),
];

/// User name → restriction name.
const USER_RESTRICTIONS: &[(&str, &str)] = &[
    ("Michael", "Vegetarian"),
    ("George Michael", "Gluten-Free"),
    ("Gob", "Paleo"),
];

/// Restaurant name → endorsement name.
const RESTAURANT_ENDORSEMENTS: &[(&str, &str)] = &[("Lardo", "Gluten-Free Options")];

/// Table capacities given to every seeded restaurant.
const TABLE_CAPACITIES: &[i32] = &[2, 4, 4, 6];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { yes } => seed(&pool, yes).await,
        Commands::Stats => stats(&pool).await,
        Commands::Db { action: DbAction::Check } => db_check(&pool).await,
    }
}

/// Loads the demo dataset.
async fn seed(pool: &PgPool, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Insert the demo dataset into the current database?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    println!("{}", "Start seeding ...".bold());

    let mut endorsement_ids: Vec<(String, i64)> = Vec::new();
    for (endorsement_name, restriction_name) in ENDORSEMENTS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO endorsements (endorsement_name, restriction_name) \
             VALUES ($1, $2) RETURNING id",
        )
        .bind(endorsement_name)
        .bind(restriction_name)
        .fetch_one(pool)
        .await?;
        endorsement_ids.push(((*restriction_name).to_string(), id));
        println!("Created endorsement {} with id {}", endorsement_name.green(), id);
    }

    for (name, email, latitude, longitude) in USERS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, latitude, longitude) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(pool)
        .await?;

        let restriction = USER_RESTRICTIONS
            .iter()
            .find(|(user, _)| user == name)
            .and_then(|(_, restriction)| {
                endorsement_ids
                    .iter()
                    .find(|(name, _)| name == restriction)
            });
        if let Some((_, endorsement_id)) = restriction {
            sqlx::query("INSERT INTO user_restrictions (user_id, endorsement_id) VALUES ($1, $2)")
                .bind(id)
                .bind(endorsement_id)
                .execute(pool)
                .await?;
        }

        println!("Created user {} with id {}", name.green(), id);
    }

    for (name, latitude, longitude) in RESTAURANTS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO restaurants (name, latitude, longitude) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(pool)
        .await?;

        let endorsed = RESTAURANT_ENDORSEMENTS
            .iter()
            .find(|(restaurant, _)| restaurant == name);
        if let Some((_, endorsement_name)) = endorsed {
            sqlx::query(
                "INSERT INTO restaurant_endorsements (restaurant_id, endorsement_id) \
                 SELECT $1, id FROM endorsements WHERE endorsement_name = $2",
            )
            .bind(id)
            .bind(endorsement_name)
            .execute(pool)
            .await?;
        }

        for capacity in TABLE_CAPACITIES {
            sqlx::query("INSERT INTO tables (restaurant_id, capacity) VALUES ($1, $2)")
                .bind(id)
                .bind(capacity)
                .execute(pool)
                .await?;
        }

        println!("Created restaurant {} with id {}", name.green(), id);
    }

    println!("{}", "Seeding finished.".bold().green());
    Ok(())
}

/// Prints record counts.
async fn stats(pool: &PgPool) -> Result<()> {
    let restaurants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    let tables: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tables")
        .fetch_one(pool)
        .await?;
    let reservations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
        .fetch_one(pool)
        .await?;
    let upcoming: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE start_time > NOW()")
            .fetch_one(pool)
            .await?;

    println!("{}", "Statistics".bold());
    println!("  Restaurants:  {}", restaurants.to_string().cyan());
    println!("  Users:        {}", users.to_string().cyan());
    println!("  Tables:       {}", tables.to_string().cyan());
    println!(
        "  Reservations: {} ({} upcoming)",
        reservations.to_string().cyan(),
        upcoming.to_string().cyan()
    );
    Ok(())
}

/// Verifies connectivity and prints the server version.
async fn db_check(pool: &PgPool) -> Result<()> {
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("{} {}", "Connected:".green().bold(), version);
    Ok(())
}
