//! Todo Store
//!
//! The authoritative in-memory todo collection. One `TodoStore` exists per
//! process, shared as [`SharedTodoStore`]; handlers take the write guard for
//! the whole of a mutation, so lookup and write never interleave with another
//! request.
//!
//! Ids come from a counter that only moves forward. Deleting an item never
//! frees its id for reuse.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::{NewTodo, TodoItem, TodoPatch};

/// Process-wide handle to the store
pub type SharedTodoStore = Arc<RwLock<TodoStore>>;

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    last_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    ///
    /// The id counter starts past the largest numeric id in `items` (and past
    /// `items.len()`), so new ids cannot collide with seeded ones.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let max_numeric = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let last_id = max_numeric.max(items.len() as u64);

        Self { items, last_id }
    }

    /// The two starter items the service boots with
    pub fn seeded() -> Self {
        Self::with_items(vec![
            TodoItem {
                id: "1".to_string(),
                title: "Learn ExpressJs".to_string(),
                completed: false,
            },
            TodoItem {
                id: "2".to_string(),
                title: "Build a REST API".to_string(),
                completed: false,
            },
        ])
    }

    pub fn into_shared(self) -> SharedTodoStore {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full collection in insertion order
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    /// Append a new item and return it
    ///
    /// The counter wraps at `u64::MAX`; ids still held by live items are skipped.
    pub fn create(&mut self, new: NewTodo) -> TodoItem {
        let id = loop {
            self.last_id = self.last_id.wrapping_add(1);
            let candidate = self.last_id.to_string();
            if !self.items.iter().any(|item| item.id == candidate) {
                break candidate;
            }
        };
        let item = new.into_item(id);
        self.items.push(item.clone());

        tracing::debug!("Created todo {}", item.id);
        item
    }

    /// Merge `patch` into the item with `id`
    ///
    /// Returns the whole collection after the merge, or `None` when no item
    /// has that id.
    pub fn update(&mut self, id: &str, patch: TodoPatch) -> Option<&[TodoItem]> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        patch.apply_to(item);

        tracing::debug!("Updated todo {}", id);
        Some(&self.items)
    }

    /// Remove the item with `id` if present and return the collection
    pub fn delete(&mut self, id: &str) -> &[TodoItem] {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(index);
            tracing::debug!("Deleted todo {}", id);
        }
        &self.items
    }
}
