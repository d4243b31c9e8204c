//! UI Components
//!
//! Leptos components for the todo view.

mod new_todo_form;
mod storage_notice;
mod todo_list;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use storage_notice::StorageNotice;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
