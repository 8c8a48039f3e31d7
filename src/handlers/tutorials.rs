//! Tutorial CRUD handlers: list, read, create, update, delete, delete-all.

use crate::error::AppError;
use crate::model::{NewTutorial, Tutorial, TutorialPatch};
use crate::response::Deleted;
use crate::service::TutorialService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Substring the title must contain. Empty means no filter.
    pub title: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/tutorials",
    tag = "tutorials",
    params(ListParams),
    responses((status = 200, description = "All matching records", body = [Tutorial]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Tutorial>>, AppError> {
    let title = params.title.as_deref().filter(|t| !t.is_empty());
    let rows = TutorialService::list(&state.pool, &state.table, title).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/tutorials/published",
    tag = "tutorials",
    responses((status = 200, description = "Published records only", body = [Tutorial]))
)]
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tutorial>>, AppError> {
    let rows = TutorialService::list_published(&state.pool, &state.table).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/tutorials/{id}",
    tag = "tutorials",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = Tutorial),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Tutorial>, AppError> {
    let id = parse_id(&id_str)?;
    let row = TutorialService::find(&state.pool, &state.table, id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(row))
}

#[utoipa::path(
    post,
    path = "/api/tutorials",
    tag = "tutorials",
    request_body = NewTutorial,
    responses((status = 201, description = "Created record", body = Tutorial))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTutorial>,
) -> Result<(StatusCode, Json<Tutorial>), AppError> {
    let row = TutorialService::create(&state.pool, &state.table, &body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    put,
    path = "/api/tutorials/{id}",
    tag = "tutorials",
    params(("id" = i64, Path, description = "Record id")),
    request_body = TutorialPatch,
    responses(
        (status = 200, description = "Updated record", body = Tutorial),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<TutorialPatch>,
) -> Result<Json<Tutorial>, AppError> {
    let id = parse_id(&id_str)?;
    let row = TutorialService::update(&state.pool, &state.table, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/tutorials/{id}",
    tag = "tutorials",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = Deleted),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let id = parse_id(&id_str)?;
    if !TutorialService::delete(&state.pool, &state.table, id).await? {
        return Err(AppError::NotFound(id_str));
    }
    Ok(Json(Deleted { deleted: 1 }))
}

#[utoipa::path(
    delete,
    path = "/api/tutorials",
    tag = "tutorials",
    responses((status = 200, description = "Count of removed records", body = Deleted))
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<Json<Deleted>, AppError> {
    let deleted = TutorialService::delete_all(&state.pool, &state.table).await?;
    Ok(Json(Deleted { deleted }))
}
