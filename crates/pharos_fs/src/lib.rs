//! # Pharos FileSystem Store
//!
//! A local filesystem backend for the pharos gateway.
//!
//! This crate implements the [`ObjectStore`] trait, reading objects
//! published into a directory tree (`manifest.json`, `versions/<v>/...`,
//! `schemas/...`). Intended for local development and tests; production
//! deployments sit in front of a durable store such as S3.
//!
//! ## Usage
//!
//! ```no_run
//! use pharos_fs::FileSystemStore;
//!
//! let store = FileSystemStore::new("./pharos_data");
//! ```

use pharos_core::prelude::*;

use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tokio::fs;

#[derive(Clone)]
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ObjectStore for FileSystemStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        let path = self.object_path(key);
        match fs::read(&path).await {
            Ok(data) => {
                let body = Bytes::from(data);
                // Strong tag from content, so repeat reads agree.
                let etag = format!("\"{}\"", hex::encode(Sha256::digest(&body)));
                Ok(Some(StoredObject {
                    body,
                    etag: Some(etag),
                }))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(key: &str, body: &[u8]) -> (tempfile::TempDir, FileSystemStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(key);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, body).unwrap();
        let store = FileSystemStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn reads_published_object() {
        let (_dir, store) = store_with("versions/3/app.js", b"console.log(1)");
        let object = store.get("versions/3/app.js").await.unwrap().unwrap();
        assert_eq!(object.body, Bytes::from_static(b"console.log(1)"));
        assert!(object.etag.is_some());
    }

    #[tokio::test]
    async fn etag_is_stable_across_reads() {
        let (_dir, store) = store_with("schemas/a.json", b"{}");
        let first = store.get("schemas/a.json").await.unwrap().unwrap();
        let second = store.get("schemas/a.json").await.unwrap().unwrap();
        assert_eq!(first.etag, second.etag);
    }

    #[tokio::test]
    async fn absent_key_is_none() {
        let (_dir, store) = store_with("app.js", b"x");
        assert!(store.get("versions/9/app.js").await.unwrap().is_none());
    }
}
