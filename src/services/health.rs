use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Service health counters returned by the /health endpoint
///
/// Counts upload attempts only; no uploaded data or derived series is ever
/// retained between requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthStats {
    /// Seconds since the server started
    pub uptime_secs: u64,

    /// Total dashboard uploads attempted
    pub uploads_total: u64,

    /// Uploads rejected with a schema, parse or input error
    pub uploads_failed: u64,

    /// Rows retained by the most recent successful upload
    pub rows_last_upload: usize,

    /// RFC 3339 timestamp of the most recent successful upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_upload_at: Option<String>,
}

pub type SharedHealthStats = Arc<RwLock<HealthStats>>;
