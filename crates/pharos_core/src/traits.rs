use crate::error::*;

use bytes::Bytes;

/// An object as returned by the durable store: the body plus the
/// metadata the gateway forwards to clients.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Bytes,
    pub etag: Option<String>,
}

/// Read-only view of the durable object store. Publishing objects and
/// manifests is owned by an external process; the gateway never writes.
pub trait ObjectStore: Send + Sync + 'static + Clone {
    /// `Ok(None)` means the key is absent. `Err` is a backend fault and
    /// terminates the request; the store's own retry/durability policy
    /// is not re-implemented here.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<StoredObject>, StoreError>> + Send;
}

/// Exact-request cache key: method plus the full request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub method: String,
    pub url: String,
}

/// A complete materialized response, as stored in the edge cache.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Request-keyed response cache. Injected as an explicit capability so
/// tests can substitute an in-memory fake. Entries are written once per
/// key by the gateway; eviction is the cache's own business.
pub trait EdgeCache: Send + Sync + 'static + Clone {
    fn lookup(
        &self,
        key: &CacheKey,
    ) -> impl Future<Output = Result<Option<CachedResponse>, CacheError>> + Send;

    fn store(
        &self,
        key: CacheKey,
        response: CachedResponse,
    ) -> impl Future<Output = Result<(), CacheError>> + Send;
}
