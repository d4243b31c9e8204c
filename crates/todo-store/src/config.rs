//! Store Configuration

/// Storage key the list is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Tunables for a `TodoStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key holding the serialized list
    pub storage_key: String,
    /// Accept edits whose replacement text is blank after trimming
    pub allow_empty_edit: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            allow_empty_edit: false,
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_allow_empty_edit(mut self, allow: bool) -> Self {
        self.allow_empty_edit = allow;
        self
    }
}
