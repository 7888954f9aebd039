use pharos_core::prelude::*;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory request-keyed response cache for demos and tests.
///
/// Entries are write-once per key from the gateway's point of view;
/// concurrent writes for the same key race harmlessly because a given
/// exact request always maps to the same bytes.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<CacheKey, CachedResponse>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EdgeCache for MemoryCache {
    async fn lookup(&self, key: &CacheKey) -> Result<Option<CachedResponse>, CacheError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::Generic("cache lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn store(&self, key: CacheKey, response: CachedResponse) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Generic("cache lock poisoned".to_string()))?;
        entries.insert(key, response);
        Ok(())
    }
}
