//! Confirmation bodies for destructive operations.

use serde::Serialize;
use utoipa::ToSchema;

/// Count of rows removed by a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct Deleted {
    pub deleted: u64,
}
