//! Todo Store
//!
//! Layered architecture:
//! - model: todo entities
//! - reducer: pure state transitions over a `TodoList`
//! - storage: key-value storage seam plus an in-memory backend
//! - repository: JSON persistence of the whole list under one key
//! - store: facade that applies an action, then persists

mod config;
mod error;
mod model;
mod reducer;
mod repository;
mod storage;
mod store;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use model::{TodoId, TodoItem, TodoList};
pub use reducer::{reduce, TodoAction};
pub use repository::TodoRepository;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::{Hydration, TodoStore};
