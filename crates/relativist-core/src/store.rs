// crates/relativist-core/src/store.rs
//
// Minimal key-value capability the core persists through. The concrete
// medium (browser storage, a JSON file, memory) belongs to the caller.

use std::collections::HashMap;

use crate::error::Result;

pub trait KvStore {
    /// `None` when the key is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips_through_trait() {
        fn write(store: &mut impl KvStore) {
            store.set("k", "v".to_string()).unwrap();
        }

        let mut s = MemoryStore::new();
        assert!(s.is_empty());
        write(&mut s);
        assert_eq!(s.get("k").as_deref(), Some("v"));
        assert_eq!(s.get("missing"), None);
        assert_eq!(s.len(), 1);
    }
}
