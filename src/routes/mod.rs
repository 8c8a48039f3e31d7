//! Route assembly.

pub mod common;
pub mod tutorials;

pub use common::common_routes;
pub use tutorials::tutorial_routes;
