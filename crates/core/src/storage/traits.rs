use crate::errors::CoreError;

/// Trait abstraction for the blob store the whole collection lives in.
///
/// Implementations are synchronous and local (browser storage, a directory on
/// disk, an in-memory map). The repository only ever reads and writes whole
/// values; it never needs partial updates or iteration.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn clear(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).write(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).clear(key)
    }
}
