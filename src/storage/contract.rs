use crate::error::StorageError;

/// Key under which the whole preset list is stored as one value.
pub const PRESETS_KEY: &str = "presets";

/// Persistent key-value store the registry mirrors its list into.
///
/// There is no partial-update API: every mutation rewrites the full value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
