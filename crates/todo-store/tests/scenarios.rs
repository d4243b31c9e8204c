//! Store Scenario Tests
//!
//! End-to-end flows through `TodoStore` backed by `MemoryStorage`.

use todo_store::{
    Hydration, KeyValueStorage, MemoryStorage, StoreConfig, TodoId, TodoItem, TodoList, TodoStore,
};

fn texts(store: &TodoStore<&MemoryStorage>) -> Vec<String> {
    store.items().iter().map(|item| item.text.clone()).collect()
}

#[test]
fn test_add_toggle_delete_lifecycle() {
    let storage = MemoryStorage::new();
    let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());

    let id = store.add("Buy milk").unwrap().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].text, "Buy milk");
    assert!(!store.items()[0].completed);

    assert!(store.toggle(&id).unwrap());
    assert!(store.get(&id).unwrap().completed);

    assert!(store.delete(&id).unwrap());
    assert!(store.is_empty());
    assert_eq!(storage.raw("todos").as_deref(), Some("[]"));
}

#[test]
fn test_blank_submissions_leave_list_empty() {
    let storage = MemoryStorage::new();
    let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());

    assert_eq!(store.add("").unwrap(), None);
    assert_eq!(store.add("   ").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn test_reload_restores_identical_list() {
    let storage = MemoryStorage::new();
    let before = {
        let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());
        store.add("First").unwrap();
        let second = store.add("Second").unwrap().unwrap();
        store.add("  Third  ").unwrap();
        store.toggle(&second).unwrap();
        store.list().clone()
    };

    let (after, hydration) = TodoStore::hydrate(&storage, StoreConfig::default());

    assert!(matches!(hydration, Hydration::Restored { count: 3 }));
    assert_eq!(after.list(), &before);
    assert_eq!(texts(&after), vec!["First", "Second", "  Third  "]);
}

#[test]
fn test_delete_uses_memory_even_when_storage_diverges() {
    let storage = MemoryStorage::new();
    let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());
    let keep = store.add("Keep").unwrap().unwrap();
    let drop = store.add("Drop").unwrap().unwrap();

    // Simulate a lost write: storage holds a stale single-item list.
    let stale = TodoList::from(vec![TodoItem::with_id(TodoId::from("stale"), "Stale")]);
    storage
        .set_item("todos", &serde_json::to_string(&stale).unwrap())
        .unwrap();

    store.delete(&drop).unwrap();

    assert_eq!(texts(&store), vec!["Keep"]);
    let persisted: TodoList = serde_json::from_str(&storage.raw("todos").unwrap()).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted.items()[0].id, keep);
}

#[test]
fn test_session_continues_after_write_failures() {
    let storage = MemoryStorage::new();
    let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());
    storage.set_fail_writes(true);

    assert!(store.add("Offline item").is_err());
    assert_eq!(texts(&store), vec!["Offline item"]);
    assert!(storage.raw("todos").is_none());

    storage.set_fail_writes(false);
    store.add("Back online").unwrap();
    let persisted: TodoList = serde_json::from_str(&storage.raw("todos").unwrap()).unwrap();
    assert_eq!(persisted.len(), 2);
}

#[test]
fn test_edit_preserves_id_and_completion() {
    let storage = MemoryStorage::new();
    let (mut store, _) = TodoStore::hydrate(&storage, StoreConfig::default());
    let id = store.add("Draft").unwrap().unwrap();
    store.toggle(&id).unwrap();

    assert!(store.edit(&id, "Final").unwrap());

    let item = store.get(&id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.text, "Final");
    assert!(item.completed);
}

#[test]
fn test_corrupt_storage_is_replaced_on_first_write() {
    let storage = MemoryStorage::with_entry("todos", "definitely not json");
    let (mut store, hydration) = TodoStore::hydrate(&storage, StoreConfig::default());
    assert!(matches!(hydration, Hydration::Discarded(_)));

    store.add("Fresh start").unwrap();

    let persisted: TodoList = serde_json::from_str(&storage.raw("todos").unwrap()).unwrap();
    assert_eq!(persisted.items()[0].text, "Fresh start");
}
