//! Key naming rules for derived objects.
//!
//! Derived key format: `resized/{size_name}/{basename}`. Every derived key
//! contains [`RESIZED_PREFIX`], which is what [`is_resized_key`] checks.

use crate::constants::{CONTENT_TYPE_JPEG, CONTENT_TYPE_PNG, RESIZED_PREFIX};

/// True if the key lives anywhere under the resized namespace.
///
/// This is a substring check, not a prefix check: `uploads/resized/a.jpg`
/// is skipped as well.
pub fn is_resized_key(key: &str) -> bool {
    key.contains(RESIZED_PREFIX)
}

/// Final path segment of a key (everything after the last `/`).
pub fn basename(key: &str) -> &str {
    match key.rfind('/') {
        Some(idx) => &key[idx + 1..],
        None => key,
    }
}

/// Destination key for one size variant of `original_key`.
pub fn resized_key(size_name: &str, original_key: &str) -> String {
    format!("{}{}/{}", RESIZED_PREFIX, size_name, basename(original_key))
}

/// Content type derived from the original key's extension.
///
/// `.png` (any case) maps to `image/png`; every other extension, including
/// none at all, maps to `image/jpeg`.
pub fn content_type_for_key(key: &str) -> &'static str {
    let name = basename(key);
    let extension = match name.rfind('.') {
        // A leading dot marks a hidden file, not an extension.
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    };

    if extension.eq_ignore_ascii_case("png") {
        CONTENT_TYPE_PNG
    } else {
        CONTENT_TYPE_JPEG
    }
}
