//! Tutorial CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::{NewTutorial, Tutorial, TutorialPatch};
use crate::sql::{self, QueryBuf};
use sqlx::PgPool;

pub struct TutorialService;

impl TutorialService {
    /// List rows, optionally narrowed to titles containing the substring.
    pub async fn list(
        pool: &PgPool,
        table: &str,
        title: Option<&str>,
    ) -> Result<Vec<Tutorial>, AppError> {
        Self::fetch_many(pool, &sql::select_list(table, title)).await
    }

    /// List rows with published = true.
    pub async fn list_published(pool: &PgPool, table: &str) -> Result<Vec<Tutorial>, AppError> {
        Self::fetch_many(pool, &sql::select_published(table)).await
    }

    /// Fetch one row by primary key.
    pub async fn find(pool: &PgPool, table: &str, id: i64) -> Result<Option<Tutorial>, AppError> {
        Self::fetch_optional(pool, &sql::select_by_id(table, id)).await
    }

    /// Insert one row. Returns the created row with its assigned id.
    pub async fn create(
        pool: &PgPool,
        table: &str,
        new: &NewTutorial,
    ) -> Result<Tutorial, AppError> {
        let q = sql::insert(table, new);
        Self::fetch_optional(pool, &q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Update one row by id. An empty patch re-reads the current row.
    pub async fn update(
        pool: &PgPool,
        table: &str,
        id: i64,
        patch: &TutorialPatch,
    ) -> Result<Option<Tutorial>, AppError> {
        match sql::update(table, id, patch) {
            Some(q) => Self::fetch_optional(pool, &q).await,
            None => Self::find(pool, table, id).await,
        }
    }

    /// Delete one row by id. Returns false when the id was absent.
    pub async fn delete(pool: &PgPool, table: &str, id: i64) -> Result<bool, AppError> {
        let q = sql::delete_by_id(table, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.execute(pool).await?.rows_affected() > 0)
    }

    /// Unconditional delete of every row. Returns the count removed.
    pub async fn delete_all(pool: &PgPool, table: &str) -> Result<u64, AppError> {
        let q = sql::delete_all(table);
        tracing::debug!(sql = %q.sql, "query");
        Ok(sqlx::query(&q.sql).execute(pool).await?.rows_affected())
    }

    async fn fetch_many(pool: &PgPool, q: &QueryBuf) -> Result<Vec<Tutorial>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Tutorial>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn fetch_optional(pool: &PgPool, q: &QueryBuf) -> Result<Option<Tutorial>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Tutorial>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?)
    }
}
