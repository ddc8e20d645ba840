//! API constants

/// API base path prefix
pub const API_PREFIX: &str = "/api";

/// Headroom on top of the maximum CV size for the other multipart fields and boundaries
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Readiness probe timeout
pub const READINESS_TIMEOUT_SECS: u64 = 5;

/// In-flight request ceiling unless `HTTP_CONCURRENCY_LIMIT` overrides it
pub const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 10_000;
