//! The in-memory todo store.
//!
//! # Design
//! Records live in a `Vec` in insertion order, so List needs no extra
//! bookkeeping. All id lookups are linear scans, first match wins — fine
//! for a small transient dataset. Ids come from a monotonic counter that
//! starts one past the highest seed id and is never reused, so a delete
//! can never make a later create ambiguous.
//!
//! Id parsing belongs to the HTTP layer; the store only sees integers.

use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Authoritative holder of all todo records for the process lifetime.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: i64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store over a collaborator-supplied seed, continuing id
    /// assignment above the seed's highest id.
    pub fn with_seed(seed: Vec<Todo>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().map_or(0, |max| max + 1);
        Self {
            todos: seed,
            next_id,
        }
    }

    /// The full sequence in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Append a new record with the next id. Never fails.
    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text: input.text,
            fecha: input.fecha,
            done: input.done,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    pub fn get(&self, id: i64) -> Option<Todo> {
        self.todos.iter().find(|t| t.id == id).cloned()
    }

    /// Apply the present fields of `patch` to the matching record in place
    /// and return the updated record.
    pub fn update(&mut self, id: i64, patch: UpdateTodo) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(fecha) = patch.fecha {
            todo.fecha = fecha;
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        Some(todo.clone())
    }

    /// Remove the matching record, shifting subsequent records left.
    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }
}
