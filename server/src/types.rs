//! Wire DTOs for the todo API.
//!
//! # Design
//! `CreateTodo` tolerates any subset of fields: the contract stores
//! whatever is supplied and reduces omitted values to the serialization
//! contract's empty markers (`""` / `false`). `UpdateTodo` distinguishes
//! "key absent" from "value supplied" with `Option` fields, one consistent
//! presence rule for all three fields.

use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// `id` is assigned by the store and is never negative. The signed type
/// keeps integer path segments such as `-5` in the "valid integer, matches
/// nothing" category instead of turning them into parse errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub fecha: String,
    pub done: bool,
}

/// Request payload for creating a todo. Creation never fails on content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub done: bool,
}

/// Partial-update payload. A field is applied iff its key is present with
/// a non-null value; absent keys and explicit `null` leave the stored
/// field untouched. An empty string is a value and is applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub fecha: Option<String>,
    pub done: Option<bool>,
}
