//! Resizer Storage Library
//!
//! This crate provides the blob store abstraction used by the resize pipeline
//! and its implementations for S3 and the local filesystem.
//!
//! Objects are addressed by `(bucket, key)`. A [`StoreProvider`] hands out a
//! [`BlobStore`] bound to the region resolved for one invocation.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store_provider;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use resizer_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::{S3StoreProvider, S3Storage};
pub use traits::{BlobStore, FixedStoreProvider, StorageError, StorageResult, StoreProvider};
