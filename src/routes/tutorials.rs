//! Tutorial CRUD routes, mounted under /api.
//! The static /tutorials/published segment is matched before the :id capture.

use crate::handlers::tutorials::{
    create, delete_all, delete_one, list, list_published, read, update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn tutorial_routes(state: AppState) -> Router {
    Router::new()
        .route("/tutorials", get(list).post(create).delete(delete_all))
        .route("/tutorials/published", get(list_published))
        .route("/tutorials/:id", get(read).put(update).delete(delete_one))
        .with_state(state)
}
