//! Todo Models
//!
//! Entities persisted under the storage key. The wire shape is a bare JSON
//! array of `{ "id", "text", "completed" }` objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque todo identifier
///
/// Fresh ids are UUID v4 strings; ids loaded from storage are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// User-supplied text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a pending item with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(TodoId::generate(), text)
    }

    pub fn with_id(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered todo list; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.0.iter_mut().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|item| item.completed).count()
    }

    pub(crate) fn push(&mut self, item: TodoItem) {
        self.0.push(item);
    }

    /// Remove the item with `id`, returning it if present
    pub(crate) fn remove(&mut self, id: &TodoId) -> Option<TodoItem> {
        let index = self.0.iter().position(|item| &item.id == id)?;
        Some(self.0.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<TodoItem> {
        self.0
    }
}

/// Builds a list verbatim; duplicate or empty ids are not filtered here.
impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
