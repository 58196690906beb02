mod helpers;

use helpers::fixtures::{create_test_jpeg, create_test_png, inspect};
use helpers::{RecordingStore, StubCodec, BUCKET};
use image::ImageFormat;
use resizer_core::{ErrorMetadata, ObjectRef, Summary};
use resizer_lambda::{ResizeError, ResizeService};
use resizer_processing::{CodecError, ImageTransformer, OutputFormat};
use resizer_storage::StorageError;
use std::sync::Arc;

const REGION: &str = "ap-northeast-1";
const MAX_SOURCE: usize = 1024 * 1024;

fn stub_service() -> (ResizeService, Arc<StubCodec>) {
    let codec = Arc::new(StubCodec::new());
    (ResizeService::new(codec.clone(), MAX_SOURCE), codec)
}

fn object(key: &str) -> ObjectRef {
    ObjectRef::new(BUCKET, key, REGION)
}

#[tokio::test]
async fn test_resized_key_is_skipped_without_store_access() {
    let store = RecordingStore::new();
    let (service, codec) = stub_service();

    for key in ["resized/small/photo.jpg", "uploads/resized/large/photo.jpg"] {
        let summary = service.handle(store.as_ref(), &object(key)).await.unwrap();
        assert_eq!(summary, Summary::Skipped { key: key.to_string() });
    }

    assert!(store.gets().is_empty());
    assert_eq!(store.put_attempts(), 0);
    assert!(codec.calls().is_empty());
}

#[tokio::test]
async fn test_jpeg_key_produces_three_uploads_in_order() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/photo.jpg", create_test_jpeg(32, 16));
    let (service, codec) = stub_service();

    let summary = service
        .handle(store.as_ref(), &object("images/photo.jpg"))
        .await
        .unwrap();

    let expected = vec![
        "resized/small/photo.jpg".to_string(),
        "resized/medium/photo.jpg".to_string(),
        "resized/large/photo.jpg".to_string(),
    ];
    assert_eq!(
        summary,
        Summary::Processed {
            bucket: BUCKET.to_string(),
            source_key: "images/photo.jpg".to_string(),
            uploaded: expected.clone(),
        }
    );

    assert_eq!(store.gets().len(), 1);
    assert_eq!(store.put_keys(), expected);
    for put in store.puts() {
        assert_eq!(put.bucket, BUCKET);
        assert_eq!(put.content_type, "image/jpeg");
    }

    assert_eq!(
        codec.calls(),
        vec![
            (200, 200, OutputFormat::Jpeg),
            (800, 800, OutputFormat::Jpeg),
            (1200, 1200, OutputFormat::Jpeg),
        ]
    );
}

#[tokio::test]
async fn test_uppercase_png_extension_uses_png_content_type() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/photo.PNG", create_test_png(16, 16));
    let (service, codec) = stub_service();

    service
        .handle(store.as_ref(), &object("images/photo.PNG"))
        .await
        .unwrap();

    assert_eq!(
        store.put_keys(),
        vec![
            "resized/small/photo.PNG",
            "resized/medium/photo.PNG",
            "resized/large/photo.PNG",
        ]
    );
    assert!(store.puts().iter().all(|p| p.content_type == "image/png"));
    assert!(codec.calls().iter().all(|(_, _, f)| *f == OutputFormat::Png));
}

#[tokio::test]
async fn test_non_png_extensions_fall_back_to_jpeg() {
    for key in ["a.gif", "b.webp", "noext", "dir.png/file"] {
        let store = RecordingStore::new();
        store.insert(BUCKET, key, create_test_jpeg(8, 8));
        let (service, _) = stub_service();

        service.handle(store.as_ref(), &object(key)).await.unwrap();
        assert!(
            store.puts().iter().all(|p| p.content_type == "image/jpeg"),
            "{key}"
        );
    }
}

#[tokio::test]
async fn test_download_failure_means_zero_uploads() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/photo.jpg", create_test_jpeg(8, 8));
    store.fail_downloads();
    let (service, codec) = stub_service();

    let err = service
        .handle(store.as_ref(), &object("images/photo.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResizeError::Store(StorageError::DownloadFailed(_))));
    assert!(err.is_retryable());
    assert_eq!(store.put_attempts(), 0);
    assert!(codec.calls().is_empty());
}

#[tokio::test]
async fn test_missing_source_object() {
    let store = RecordingStore::new();
    let (service, _) = stub_service();

    let err = service
        .handle(store.as_ref(), &object("images/missing.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResizeError::Store(StorageError::NotFound(_))));
    assert!(!err.is_retryable());
    assert_eq!(store.put_attempts(), 0);
}

#[tokio::test]
async fn test_second_upload_failure_keeps_first_and_stops() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/photo.jpg", create_test_jpeg(8, 8));
    store.fail_put_on(2);
    let (service, codec) = stub_service();

    let err = service
        .handle(store.as_ref(), &object("images/photo.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResizeError::Store(StorageError::UploadFailed(_))));
    assert_eq!(store.put_keys(), vec!["resized/small/photo.jpg"]);
    assert!(store.object(BUCKET, "resized/small/photo.jpg").is_some());
    assert!(store.object(BUCKET, "resized/large/photo.jpg").is_none());
    assert_eq!(store.put_attempts(), 2);
    // Large was never rendered.
    assert_eq!(codec.calls().len(), 2);
}

#[tokio::test]
async fn test_codec_failure_aborts_remaining_sizes() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/photo.jpg", create_test_jpeg(8, 8));
    let codec = Arc::new(StubCodec::failing_on(2));
    let service = ResizeService::new(codec.clone(), MAX_SOURCE);

    let err = service
        .handle(store.as_ref(), &object("images/photo.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResizeError::Codec(CodecError::Decode(_))));
    assert!(!err.is_retryable());
    assert_eq!(store.put_keys(), vec!["resized/small/photo.jpg"]);
    assert_eq!(store.gets().len(), 1);
}

#[tokio::test]
async fn test_oversized_source_is_rejected_before_decoding() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "big.jpg", vec![0u8; 64]);
    let codec = Arc::new(StubCodec::new());
    let service = ResizeService::new(codec.clone(), 32);

    let err = service
        .handle(store.as_ref(), &object("big.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResizeError::Codec(CodecError::SourceTooLarge { size: 64, limit: 32 })
    ));
    assert!(codec.calls().is_empty());
    assert_eq!(store.put_attempts(), 0);
}

#[tokio::test]
async fn test_real_codec_cover_resize() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "images/wide.jpg", create_test_jpeg(100, 50));
    let service = ResizeService::new(Arc::new(ImageTransformer::default()), MAX_SOURCE);

    service
        .handle(store.as_ref(), &object("images/wide.jpg"))
        .await
        .unwrap();

    let expected = [
        ("resized/small/wide.jpg", 400, 200),
        ("resized/medium/wide.jpg", 1600, 800),
        ("resized/large/wide.jpg", 2400, 1200),
    ];
    for (key, width, height) in expected {
        let (data, content_type) = store.object(BUCKET, key).unwrap();
        assert_eq!(content_type, "image/jpeg");
        assert_eq!(inspect(&data), (ImageFormat::Jpeg, width, height), "{key}");
    }
}

#[tokio::test]
async fn test_real_codec_png_stays_png() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "icons/logo.png", create_test_png(40, 40));
    let service = ResizeService::new(Arc::new(ImageTransformer::default()), MAX_SOURCE);

    service
        .handle(store.as_ref(), &object("icons/logo.png"))
        .await
        .unwrap();

    let (data, content_type) = store.object(BUCKET, "resized/small/logo.png").unwrap();
    assert_eq!(content_type, "image/png");
    assert_eq!(inspect(&data), (ImageFormat::Png, 200, 200));
}

#[tokio::test]
async fn test_real_codec_rejects_non_image() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "notes/readme.jpg", b"plain text, not pixels".to_vec());
    let service = ResizeService::new(Arc::new(ImageTransformer::default()), MAX_SOURCE);

    let err = service
        .handle(store.as_ref(), &object("notes/readme.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResizeError::Codec(CodecError::UnknownFormat(_))));
    assert_eq!(store.put_attempts(), 0);
}

#[tokio::test]
async fn test_real_codec_extreme_aspect_fails_without_uploads() {
    let store = RecordingStore::new();
    store.insert(BUCKET, "strips/line.png", create_test_png(1, 10000));
    let service = ResizeService::new(Arc::new(ImageTransformer::default()), MAX_SOURCE);

    let err = service
        .handle(store.as_ref(), &object("strips/line.png"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResizeError::Codec(CodecError::OutputTooLarge {
            width: 200,
            height: 2_000_000,
            ..
        })
    ));
    assert!(!err.is_retryable());
    assert_eq!(store.put_attempts(), 0);
}
