//! HTTP handlers for tutorial CRUD.

pub mod tutorials;
pub use tutorials::*;
