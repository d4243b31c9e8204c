//! Todo Reducer
//!
//! Pure state transitions over a `TodoList`. No I/O happens here; the store
//! persists after a transition reports a change.

use crate::config::StoreConfig;
use crate::model::{TodoId, TodoItem, TodoList};

/// Commands a user gesture can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new pending item
    Add { text: String },
    /// Flip `completed` on an item
    Toggle { id: TodoId },
    /// Replace the text of an item
    Edit { id: TodoId, text: String },
    /// Remove an item
    Delete { id: TodoId },
}

/// Apply `action` to `list`, returning whether the list changed.
pub fn reduce(list: &mut TodoList, action: TodoAction, config: &StoreConfig) -> bool {
    match action {
        TodoAction::Add { text } => {
            if is_blank(&text) {
                return false;
            }
            // Stored untrimmed.
            list.push(TodoItem::new(text));
            true
        }
        TodoAction::Toggle { id } => match list.get_mut(&id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        },
        TodoAction::Edit { id, text } => {
            if is_blank(&text) && !config.allow_empty_edit {
                return false;
            }
            match list.get_mut(&id) {
                Some(item) if item.text != text => {
                    item.text = text;
                    true
                }
                _ => false,
            }
        }
        TodoAction::Delete { id } => list.remove(&id).is_some(),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from(id),
            text: text.to_string(),
            completed,
        }
    }

    fn sample_list() -> TodoList {
        TodoList::from(vec![
            make_item("1", "Buy milk", false),
            make_item("2", "Walk dog", true),
            make_item("3", "Read book", false),
        ])
    }

    #[test]
    fn test_add_appends_pending_item() {
        let mut list = sample_list();
        let config = StoreConfig::default();

        let changed = reduce(&mut list, TodoAction::Add { text: "Call mom".into() }, &config);

        assert!(changed);
        assert_eq!(list.len(), 4);
        let last = list.items().last().unwrap();
        assert_eq!(last.text, "Call mom");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_keeps_surrounding_whitespace() {
        let mut list = TodoList::new();
        reduce(&mut list, TodoAction::Add { text: "  padded ".into() }, &StoreConfig::default());
        assert_eq!(list.items()[0].text, "  padded ");
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = sample_list();
        let config = StoreConfig::default();

        for text in ["", "   ", "\t\n"] {
            assert!(!reduce(&mut list, TodoAction::Add { text: text.into() }, &config));
        }
        assert_eq!(list, sample_list());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = sample_list();
        let config = StoreConfig::default();
        let id = TodoId::from("2");

        assert!(reduce(&mut list, TodoAction::Toggle { id: id.clone() }, &config));
        assert!(!list.get(&id).unwrap().completed);
        assert!(reduce(&mut list, TodoAction::Toggle { id: id.clone() }, &config));
        assert_eq!(list, sample_list());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = sample_list();
        let changed = reduce(
            &mut list,
            TodoAction::Toggle { id: TodoId::from("missing") },
            &StoreConfig::default(),
        );
        assert!(!changed);
        assert_eq!(list, sample_list());
    }

    #[test]
    fn test_edit_changes_only_text() {
        let mut list = sample_list();
        let id = TodoId::from("2");

        let changed = reduce(
            &mut list,
            TodoAction::Edit { id: id.clone(), text: "Walk cat".into() },
            &StoreConfig::default(),
        );

        assert!(changed);
        let item = list.get(&id).unwrap();
        assert_eq!(item.text, "Walk cat");
        assert!(item.completed);
        assert_eq!(list.items()[0], make_item("1", "Buy milk", false));
        assert_eq!(list.items()[2], make_item("3", "Read book", false));
    }

    #[test]
    fn test_edit_blank_text_respects_config() {
        let id = TodoId::from("1");
        let edit = TodoAction::Edit { id: id.clone(), text: "  ".into() };

        let mut list = sample_list();
        assert!(!reduce(&mut list, edit.clone(), &StoreConfig::default()));
        assert_eq!(list.get(&id).unwrap().text, "Buy milk");

        let permissive = StoreConfig::default().with_allow_empty_edit(true);
        assert!(reduce(&mut list, edit, &permissive));
        assert_eq!(list.get(&id).unwrap().text, "  ");
    }

    #[test]
    fn test_edit_same_text_reports_no_change() {
        let mut list = sample_list();
        let changed = reduce(
            &mut list,
            TodoAction::Edit { id: TodoId::from("1"), text: "Buy milk".into() },
            &StoreConfig::default(),
        );
        assert!(!changed);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut list = sample_list();

        let changed = reduce(
            &mut list,
            TodoAction::Delete { id: TodoId::from("2") },
            &StoreConfig::default(),
        );

        assert!(changed);
        assert_eq!(
            list.into_vec(),
            vec![make_item("1", "Buy milk", false), make_item("3", "Read book", false)]
        );
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = sample_list();
        let changed = reduce(
            &mut list,
            TodoAction::Delete { id: TodoId::from("9") },
            &StoreConfig::default(),
        );
        assert!(!changed);
        assert_eq!(list.len(), 3);
    }
}
