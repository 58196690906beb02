//! Raw storage notification payload.
//!
//! Every field is optional at the type level so that a payload missing any
//! part still deserializes and the parser can name exactly what is absent.
//! Fields the pipeline does not read (eventName, eTag, size, ...) are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    #[serde(rename = "Records", default)]
    pub records: Option<Vec<Option<TriggerRecord>>>,
    #[serde(rename = "awsRegion", default)]
    pub aws_region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRecord {
    #[serde(rename = "awsRegion", default)]
    pub aws_region: Option<String>,
    #[serde(default)]
    pub s3: Option<RecordS3>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordS3 {
    #[serde(default)]
    pub bucket: Option<RecordBucket>,
    #[serde(default)]
    pub object: Option<RecordObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordObject {
    /// URL-encoded object key, exactly as delivered by the notification
    #[serde(default)]
    pub key: Option<String>,
}

impl TriggerEvent {
    /// Build a single-record event; used by the local runner and tests.
    pub fn single(bucket: &str, encoded_key: &str, region: Option<&str>) -> Self {
        TriggerEvent {
            records: Some(vec![Some(TriggerRecord {
                aws_region: region.map(String::from),
                s3: Some(RecordS3 {
                    bucket: Some(RecordBucket {
                        name: Some(bucket.to_string()),
                    }),
                    object: Some(RecordObject {
                        key: Some(encoded_key.to_string()),
                    }),
                }),
            })]),
            aws_region: None,
        }
    }
}
