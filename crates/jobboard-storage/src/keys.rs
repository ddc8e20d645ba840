//! Storage key derivation for uploaded CVs.
//!
//! Key format: `applications/{correlation_id}/{token}_{sanitized_filename}` where the token is
//! 16 lowercase hex characters from 8 random bytes. Keys are never reused.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix shared by every CV object
pub const APPLICATIONS_PREFIX: &str = "applications";

/// RFC 3986 unreserved characters stay as-is inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Replace every run of whitespace with a single underscore. Case and punctuation are kept.
pub fn sanitize_filename(filename: &str) -> String {
    WHITESPACE_RUN.replace_all(filename, "_").into_owned()
}

/// 16 lowercase hex characters drawn from 8 random bytes.
pub fn generate_random_token() -> String {
    let bytes: [u8; 8] = rand::random();
    hex::encode(bytes)
}

/// Build the key for a CV upload from an explicit token.
pub fn application_cv_key_with_token(correlation_id: &str, token: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}_{}",
        APPLICATIONS_PREFIX,
        correlation_id,
        token,
        sanitize_filename(filename)
    )
}

/// Build a fresh key for a CV upload.
pub fn application_cv_key(correlation_id: &str, filename: &str) -> String {
    application_cv_key_with_token(correlation_id, &generate_random_token(), filename)
}

/// Percent-encode each segment of a key for use in a location URL. `/` separators are kept.
pub fn encode_key_path(storage_key: &str) -> String {
    storage_key
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Recover the storage key from a location URL returned by a backend.
///
/// Locations end in `{base}/{encoded key}`, so the key is the decoded suffix starting
/// at `applications/{correlation_id}/`.
pub fn application_cv_key_from_location(location: &str, correlation_id: &str) -> Option<String> {
    let marker = format!("{}/{}/", APPLICATIONS_PREFIX, encode_key_path(correlation_id));
    let start = location.find(&marker)?;
    let encoded = &location[start..];
    if encoded.len() <= marker.len() {
        return None;
    }
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|key| key.into_owned())
}
