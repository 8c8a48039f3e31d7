//! OpenAPI document assembly.

use crate::handlers::tutorials;
use crate::model::{NewTutorial, Tutorial, TutorialPatch};
use crate::response::Deleted;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tutorials::list,
        tutorials::list_published,
        tutorials::read,
        tutorials::create,
        tutorials::update,
        tutorials::delete_one,
        tutorials::delete_all,
    ),
    components(schemas(Tutorial, NewTutorial, TutorialPatch, Deleted)),
    tags((name = "tutorials", description = "Tutorial record management"))
)]
pub struct ApiDoc;
