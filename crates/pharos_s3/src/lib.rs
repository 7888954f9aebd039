use pharos_core::prelude::*;

use aws_sdk_s3::Client;
use aws_sdk_s3::error::SdkError;
use tracing::{debug, error, instrument};

#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: String, prefix: Option<String>) -> Self {
        Self {
            client,
            bucket,
            prefix: prefix.unwrap_or_default(),
        }
    }

    fn key(&self, key: &str) -> String {
        self.prefix
            .is_empty()
            .then(|| key.to_string())
            .unwrap_or(format!("{}{key}", self.prefix))
    }
}

impl ObjectStore for S3Store {
    #[instrument(skip(self), fields(bucket = %self.bucket, key))]
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        let key = self.key(key);
        tracing::Span::current().record("key", &key);

        debug!("Reading object from S3...");
        let res = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await;

        match res {
            Ok(output) => {
                let etag = output.e_tag().map(str::to_string);
                let data = output.body.collect().await.map_err(|e| {
                    error!("Failed to stream body: {e:?}");
                    StoreError::Generic(format!("Failed to stream S3 body: {e}"))
                })?;
                Ok(Some(StoredObject {
                    body: data.into_bytes(),
                    etag,
                }))
            }
            Err(SdkError::ServiceError(err)) => {
                let inner = err.err();
                if inner.is_no_such_key() {
                    debug!("Object not found in S3");
                    Ok(None)
                } else {
                    error!("S3 Service Error during read: {err:?}");
                    Err(StoreError::Generic(format!("S3 Service Error: {inner:?}")))
                }
            }
            Err(e) => {
                error!("Unexpected S3 Error: {e:?}");
                Err(StoreError::Generic(format!("S3 Error: {e}")))
            }
        }
    }
}
