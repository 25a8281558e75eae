//! Book model
//!
//! A book is an open set of JSON fields plus a mandatory `id`. The id is kept
//! apart from the other fields so the store key and the record id can never
//! disagree.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::{
    openapi::{
        schema::{AdditionalProperties, ObjectBuilder, OneOfBuilder, Schema, SchemaType},
        RefOr,
    },
    ToSchema,
};

use crate::error::{AppError, AppResult};

/// Name of the reserved identifier field
pub const ID_FIELD: &str = "id";

/// Raw JSON object as received from a client
pub type BookFields = Map<String, Value>;

/// Book identifier.
///
/// Positive integers and non-empty strings are accepted. A string holding the
/// canonical decimal form of a positive integer is the same id as that
/// integer, so `/books/1` reaches a book created with `"id": 1`.
/// Numeric ids sort before text ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl BookId {
    /// Extract an id from a JSON value
    pub fn from_value(value: &Value) -> AppResult<Self> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(id) if id > 0 => Ok(BookId::Number(id)),
                _ => Err(AppError::InvalidArgument(format!(
                    "Book id must be a positive integer, got {}",
                    n
                ))),
            },
            Value::String(s) => s.parse(),
            other => Err(AppError::InvalidArgument(format!(
                "Book id must be a number or a string, got {}",
                other
            ))),
        }
    }
}

impl FromStr for BookId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AppError::InvalidArgument("Book id is empty".to_string()));
        }

        match s.parse::<u64>() {
            Ok(id) if id > 0 && id.to_string() == s => Ok(BookId::Number(id)),
            _ => Ok(BookId::Text(s.to_string())),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(id) => write!(f, "{}", id),
            BookId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        BookId::Number(id)
    }
}

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    /// Every field except `id`, in insertion order
    #[serde(flatten)]
    fields: BookFields,
}

impl Book {
    /// Build a book from a client-supplied object, which must carry an `id`
    pub fn from_fields(mut fields: BookFields) -> AppResult<Self> {
        // shift_remove keeps the remaining fields in client order
        let id = match fields.shift_remove(ID_FIELD) {
            Some(value) => BookId::from_value(&value)?,
            None => return Err(AppError::InvalidArgument("Book id is missing".to_string())),
        };
        Ok(Self { id, fields })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Shallow merge: every field in `partial` overwrites the stored one.
    /// `id` is immutable and skipped.
    pub fn merge(&mut self, partial: BookFields) {
        for (name, value) in partial {
            if name != ID_FIELD {
                self.fields.insert(name, value);
            }
        }
    }
}

impl<'s> ToSchema<'s> for Book {
    fn schema() -> (&'s str, RefOr<Schema>) {
        let id = OneOfBuilder::new()
            .item(ObjectBuilder::new().schema_type(SchemaType::Integer))
            .item(ObjectBuilder::new().schema_type(SchemaType::String))
            .description(Some("Caller-supplied identifier (positive integer or non-empty string)"));

        (
            "Book",
            ObjectBuilder::new()
                .description(Some("Book record: an id plus any other fields"))
                .property(ID_FIELD, id)
                .required(ID_FIELD)
                .additional_properties(Some(AdditionalProperties::FreeForm(true)))
                .into(),
        )
    }
}
