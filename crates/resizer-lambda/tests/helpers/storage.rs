//! In-memory blob store that records every call.

use async_trait::async_trait;
use bytes::Bytes;
use resizer_storage::{BlobStore, StorageBackend, StorageError, StorageResult, StoreProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub len: usize,
}

/// Recording store with failure injection.
#[derive(Default)]
pub struct RecordingStore {
    objects: Mutex<HashMap<(String, String), (Bytes, String)>>,
    gets: Mutex<Vec<(String, String)>>,
    puts: Mutex<Vec<PutCall>>,
    put_attempts: AtomicUsize,
    fail_get: AtomicBool,
    fail_put_on: Mutex<Option<usize>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed an object without recording a put.
    pub fn insert(&self, bucket: &str, key: &str, data: impl Into<Bytes>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            (data.into(), "application/octet-stream".to_string()),
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<(Bytes, String)> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Make every download fail.
    pub fn fail_downloads(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    /// Make the nth put attempt (1-based) fail.
    pub fn fail_put_on(&self, attempt: usize) {
        *self.fail_put_on.lock().unwrap() = Some(attempt);
    }

    pub fn gets(&self) -> Vec<(String, String)> {
        self.gets.lock().unwrap().clone()
    }

    /// Successful puts, in call order.
    pub fn puts(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.puts().into_iter().map(|p| p.key).collect()
    }

    pub fn put_attempts(&self) -> usize {
        self.put_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for RecordingStore {
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        self.gets
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StorageError::DownloadFailed(format!(
                "s3://{}/{}: connection reset",
                bucket, key
            )));
        }

        self.object(bucket, key)
            .map(|(data, _)| data)
            .ok_or_else(|| StorageError::NotFound(format!("s3://{}/{}", bucket, key)))
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()> {
        let attempt = self.put_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if *self.fail_put_on.lock().unwrap() == Some(attempt) {
            return Err(StorageError::UploadFailed(format!(
                "s3://{}/{}: injected failure",
                bucket, key
            )));
        }

        self.puts.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            content_type: content_type.to_string(),
            len: data.len(),
        });
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            (data, content_type.to_string()),
        );
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Provider that hands out one recording store and remembers which regions
/// were requested.
pub struct RecordingProvider {
    store: Arc<RecordingStore>,
    regions: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(store: Arc<RecordingStore>) -> Self {
        Self {
            store,
            regions: Mutex::new(Vec::new()),
        }
    }

    pub fn regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }
}

impl StoreProvider for RecordingProvider {
    fn store_for_region(&self, region: &str) -> StorageResult<Arc<dyn BlobStore>> {
        self.regions.lock().unwrap().push(region.to_string());
        Ok(self.store.clone())
    }
}
