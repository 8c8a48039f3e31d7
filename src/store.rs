//! Database and table management for the tutorials store.

use crate::config::SchemaPolicy;
use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const TABLE_NAME: &str = "tutorials";

/// Quote identifier for PostgreSQL.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Schema-qualified, quoted table name (e.g. `"public"."tutorials"`).
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(TABLE_NAME))
}

/// Apply the configured schema policy: create the table or verify it exists.
pub async fn prepare_store(
    pool: &PgPool,
    schema: &str,
    policy: SchemaPolicy,
) -> Result<(), AppError> {
    match policy {
        SchemaPolicy::AutoCreate => ensure_tutorials_table(pool, schema).await,
        SchemaPolicy::ExpectExisting => verify_tutorials_table(pool, schema).await,
    }
}

/// Create the schema (if not `public`) and the tutorials table if missing.
pub async fn ensure_tutorials_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    if schema != "public" {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
            .execute(pool)
            .await?;
    }
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT,
            description TEXT,
            published BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
        qualified_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Fail when the tutorials table is absent from the given schema.
pub async fn verify_tutorials_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM information_schema.tables \
         WHERE table_schema = $1 AND table_name = $2)",
    )
    .bind(schema)
    .bind(TABLE_NAME)
    .fetch_one(pool)
    .await?;
    if !exists.0 {
        return Err(AppError::Config(ConfigError::MissingTable {
            schema: schema.to_string(),
        }));
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}
