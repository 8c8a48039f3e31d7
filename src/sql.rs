//! Parameterized statements for the tutorials table: identifiers are fixed
//! or quoted, values always bound.

use crate::model::{NewTutorial, TutorialPatch};
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// Column list shared by every statement that returns rows.
pub const COLUMNS: &str = "id, title, description, published";

/// A value bound to one `$n` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    Bool(bool),
    I64(i64),
    Text(String),
}

fn opt_text(v: &Option<String>) -> BindValue {
    match v {
        Some(s) => BindValue::Text(s.clone()),
        None => BindValue::Null,
    }
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            BindValue::Null => IsNull::Yes,
            BindValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            BindValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            BindValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            BindValue::Null | BindValue::Text(_) => <String as sqlx::Type<Postgres>>::type_info(),
            BindValue::Bool(_) => <bool as sqlx::Type<Postgres>>::type_info(),
            BindValue::I64(_) => <i64 as sqlx::Type<Postgres>>::type_info(),
        })
    }
}

impl sqlx::Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(_ty: &PgTypeInfo) -> bool {
        true
    }
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Escape `\`, `%` and `_` so a filter matches them literally inside LIKE.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// SELECT all rows, optionally narrowed to titles containing `title`. Ordered by id.
pub fn select_list(table: &str, title: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match title {
        Some(t) => {
            let n = q.push_param(BindValue::Text(format!("%{}%", escape_like(t))));
            format!(" WHERE title LIKE ${}", n)
        }
        None => String::new(),
    };
    q.sql = format!("SELECT {} FROM {}{} ORDER BY id", COLUMNS, table, where_clause);
    q
}

/// SELECT one row by primary key.
pub fn select_by_id(table: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::I64(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, table);
    q
}

/// SELECT rows with published = TRUE. Ordered by id.
pub fn select_published(table: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE published = TRUE ORDER BY id",
        COLUMNS, table
    );
    q
}

/// INSERT one row, returning it with the generated id. An omitted
/// published flag is stored as false.
pub fn insert(table: &str, new: &NewTutorial) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(opt_text(&new.title));
    q.push_param(opt_text(&new.description));
    q.push_param(BindValue::Bool(new.published.unwrap_or(false)));
    q.sql = format!(
        "INSERT INTO {} (title, description, published) VALUES ($1, $2, $3) RETURNING {}",
        table, COLUMNS
    );
    q
}

/// UPDATE by id with only the columns the patch names, returning the row.
/// None when the patch is empty.
pub fn update(table: &str, id: i64, patch: &TutorialPatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(title) = &patch.title {
        let n = q.push_param(opt_text(title));
        sets.push(format!("title = ${}", n));
    }
    if let Some(description) = &patch.description {
        let n = q.push_param(opt_text(description));
        sets.push(format!("description = ${}", n));
    }
    if let Some(published) = patch.published {
        let n = q.push_param(BindValue::Bool(published));
        sets.push(format!("published = ${}", n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        table,
        sets.join(", "),
        id_param,
        COLUMNS
    );
    Some(q)
}

/// DELETE one row by primary key.
pub fn delete_by_id(table: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::I64(id));
    q.sql = format!("DELETE FROM {} WHERE id = $1", table);
    q
}

/// DELETE every row.
pub fn delete_all(table: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {}", table);
    q
}
