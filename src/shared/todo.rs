//! Todo Data Structures
//!
//! `TodoItem` is the record held by the server-side store. `NewTodo` and
//! `TodoPatch` are the request bodies for creating and patching items; every
//! field is optional on the wire.

use serde::{Deserialize, Serialize};

/// Title given to items created without one
pub const DEFAULT_TITLE: &str = "Untitled";

/// A single task record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    /// Store-assigned identifier, unique among live items
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl NewTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Resolve the defaults: an absent or empty title becomes `"Untitled"`,
    /// an absent flag becomes `false`.
    pub fn into_item(self, id: String) -> TodoItem {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        TodoItem {
            id,
            title,
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// Body of `PATCH /api/todos/{id}`
///
/// Only fields that are present are merged into the stored item.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    pub fn apply_to(self, item: &mut TodoItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}
