//! Tutorial record types: row mapping, JSON shapes, patch semantics.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stored tutorial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Tutorial {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: bool,
}

/// Creation body. `published` defaults to false when omitted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewTutorial {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
}

/// Partial update. Absent fields are left unchanged; an explicit `null`
/// clears a nullable column. `published` only changes on an explicit boolean.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TutorialPatch {
    #[serde(default, deserialize_with = "set_or_clear")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "set_or_clear")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub published: Option<bool>,
}

impl TutorialPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.published.is_none()
    }
}

/// A present-but-null field deserializes to Some(None); an absent field
/// takes the serde default of None.
fn set_or_clear<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}
