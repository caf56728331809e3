//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client crate carries no server dependency; the integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API. Ids are assigned by the server
/// and are never negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub fecha: String,
    pub done: bool,
}

/// Request payload for creating a new todo. The server accepts any subset
/// of fields and fills omissions with `""` / `false`; this client always
/// sends all three.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub done: bool,
}

/// Request payload for partially updating an existing todo. Only the
/// fields present in the JSON are applied; omitted fields remain unchanged
/// on the server. An empty string is a value and will be applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}
