//! Tutorials API: REST backend for tutorial records on PostgreSQL.

pub mod config;
pub mod error;
pub mod model;
pub mod openapi;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{SchemaPolicy, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use model::{NewTutorial, Tutorial, TutorialPatch};
pub use openapi::ApiDoc;
pub use state::AppState;
pub use store::{ensure_database_exists, prepare_store};
pub use routes::{common_routes, tutorial_routes};
pub use service::TutorialService;
