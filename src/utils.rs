use std::collections::BTreeMap;

use chrono::DateTime;
use md5::{Digest, Md5};

/// Builds the request signature the API validates server-side.
///
/// Concatenates `key` + `value` for every parameter in ascending key order
/// (the `BTreeMap` guarantees the order), appends the shared secret and
/// returns the lowercase hex MD5 digest. The `format` and `api_sig`
/// parameters must not be part of the signed set.
pub fn api_sig(params: &BTreeMap<&str, String>, secret: &str) -> String {
    let mut sig_string = String::new();

    for (key, value) in params {
        sig_string.push_str(key);
        sig_string.push_str(value);
    }
    sig_string.push_str(secret);

    let mut hasher = Md5::new();
    hasher.update(sig_string.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Converts a device-local log timestamp to UTC by subtracting the offset.
pub fn adjust_timestamp(timestamp: i64, utc_offset: i64) -> i64 {
    timestamp - utc_offset
}

pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
