use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store backend error: {0}")]
    Generic(String),
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Generic(String),
}

/// The closed set of request-terminal gateway failures.
///
/// Every request yields exactly one complete response; nothing here is
/// retried. The HTTP status mapping is a single exhaustive match at the
/// server boundary.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The root manifest object is absent from the store.
    #[error("Manifest not found")]
    ManifestNotFound,

    /// The manifest is present but unparsable or missing a non-empty
    /// `version` field.
    #[error("Manifest malformed: {0}")]
    ManifestMalformed(String),

    /// A pinned version token no longer matches the published version.
    #[error("Stale version token: {0}")]
    StaleVersion(String),

    /// The resolved storage key is absent. Carries the key so the
    /// response body can name it.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
