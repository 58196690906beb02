//! Trigger event parsing
//!
//! Turns a storage notification into the [`ObjectRef`] to process. Only the
//! first record is used.

use resizer_core::{ObjectRef, ParseError, TriggerEvent};
use serde_json::Value;

/// Parse a raw JSON payload.
pub fn parse_value(payload: Value, fallback_region: &str) -> Result<ObjectRef, ParseError> {
    let event: TriggerEvent = serde_json::from_value(payload)?;
    parse_event(&event, fallback_region)
}

/// Resolve bucket, decoded key and region from the first record.
///
/// Region precedence: record `awsRegion`, then top-level `awsRegion`, then
/// `fallback_region` (the configured environment region or the built-in
/// default). Empty strings count as absent.
pub fn parse_event(event: &TriggerEvent, fallback_region: &str) -> Result<ObjectRef, ParseError> {
    let records = match event.records.as_deref() {
        Some(records) if !records.is_empty() => records,
        _ => return Err(ParseError::NoRecords),
    };

    if records.len() > 1 {
        tracing::warn!(
            record_count = records.len(),
            "Event carries multiple records, only the first is processed"
        );
    }

    let record = records[0]
        .as_ref()
        .ok_or(ParseError::MissingField("Records[0]"))?;
    let s3 = record
        .s3
        .as_ref()
        .ok_or(ParseError::MissingField("Records[0].s3"))?;
    let bucket = s3
        .bucket
        .as_ref()
        .ok_or(ParseError::MissingField("Records[0].s3.bucket"))?
        .name
        .as_deref()
        .ok_or(ParseError::MissingField("Records[0].s3.bucket.name"))?;
    let encoded_key = s3
        .object
        .as_ref()
        .ok_or(ParseError::MissingField("Records[0].s3.object"))?
        .key
        .as_deref()
        .ok_or(ParseError::MissingField("Records[0].s3.object.key"))?;

    let key = decode_key(encoded_key)?;

    let region = non_empty(record.aws_region.as_deref())
        .or_else(|| non_empty(event.aws_region.as_deref()))
        .unwrap_or(fallback_region);

    Ok(ObjectRef::new(bucket, key, region))
}

/// Percent-decode an object key exactly once.
///
/// This is component decoding: `+` is a literal plus, not a space.
pub fn decode_key(encoded: &str) -> Result<String, ParseError> {
    urlencoding::decode(encoded)
        .map(|key| key.into_owned())
        .map_err(|e| ParseError::InvalidKey {
            key: encoded.to_string(),
            reason: e.to_string(),
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
