use crate::error::*;
use crate::traits::ObjectStore;

use serde::{Deserialize, Serialize};

/// The root manifest records the currently published version token.
///
/// It is written only by the external publisher; the gateway reads it
/// to resolve and validate "latest" pointers. An absent or malformed
/// manifest is an error state, never "no version".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
}

/// Fetch and validate the root manifest. One store read, no retries; a
/// miss is surfaced immediately to the caller.
pub async fn resolve_manifest<S: ObjectStore>(
    store: &S,
    manifest_key: &str,
) -> Result<Manifest, GatewayError> {
    let object = store
        .get(manifest_key)
        .await?
        .ok_or(GatewayError::ManifestNotFound)?;

    let manifest: Manifest = serde_json::from_slice(&object.body)
        .map_err(|e| GatewayError::ManifestMalformed(e.to_string()))?;

    if manifest.version.is_empty() {
        return Err(GatewayError::ManifestMalformed(
            "empty version field".to_string(),
        ));
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StoredObject;
    use bytes::Bytes;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct StaticStore {
        objects: Arc<HashMap<String, Bytes>>,
    }

    impl StaticStore {
        fn with(key: &str, body: &str) -> Self {
            let mut objects = HashMap::new();
            objects.insert(key.to_string(), Bytes::from(body.to_string()));
            Self {
                objects: Arc::new(objects),
            }
        }
    }

    impl ObjectStore for StaticStore {
        async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
            Ok(self.objects.get(key).map(|body| StoredObject {
                body: body.clone(),
                etag: None,
            }))
        }
    }

    #[tokio::test]
    async fn resolves_published_version() {
        let store = StaticStore::with("manifest.json", r#"{"version":"3"}"#);
        let manifest = resolve_manifest(&store, "manifest.json").await.unwrap();
        assert_eq!(manifest.version, "3");
    }

    #[tokio::test]
    async fn absent_manifest_is_not_found() {
        let store = StaticStore::default();
        let err = resolve_manifest(&store, "manifest.json").await.unwrap_err();
        assert!(matches!(err, GatewayError::ManifestNotFound));
    }

    #[tokio::test]
    async fn unparsable_manifest_is_malformed() {
        let store = StaticStore::with("manifest.json", "not json");
        let err = resolve_manifest(&store, "manifest.json").await.unwrap_err();
        assert!(matches!(err, GatewayError::ManifestMalformed(_)));
    }

    #[tokio::test]
    async fn empty_version_is_malformed() {
        let store = StaticStore::with("manifest.json", r#"{"version":""}"#);
        let err = resolve_manifest(&store, "manifest.json").await.unwrap_err();
        assert!(matches!(err, GatewayError::ManifestMalformed(_)));
    }
}
