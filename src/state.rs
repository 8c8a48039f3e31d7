//! Shared application state for all routes.

use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Schema-qualified tutorials table, resolved once at startup.
    pub table: Arc<str>,
}

impl AppState {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        AppState {
            pool,
            table: crate::store::qualified_table(schema).into(),
        }
    }
}
