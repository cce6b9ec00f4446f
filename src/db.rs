use crate::config::PizzeriaConfig;
use anyhow::{Context, Result};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

/// Creates the database if needed, connects a pool to it and brings the schema up to date.
pub async fn init_pool(config: &PizzeriaConfig) -> Result<Pool<Sqlite>> {
    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        info!(url = %config.database_url, "database not found, creating");
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
    }

    // cascading deletes of restaurant_pizzas rely on foreign key enforcement
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid database url {}", config.database_url))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
