use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::charts::{build_dashboard, Dashboard};
use crate::constants::{ALLOWED_CSV_EXTS, MAX_CSV_SIZE};
use crate::error::{AppError, Result};
use crate::services::{derive, parse_csv, HealthStats, SharedHealthStats};
use crate::utils::get_public_dir;

/// Response structure for dashboard uploads
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    /// Rows retained after derivation (uploaded rows minus the first)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health endpoint payload: service counters plus build metadata
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub version: &'static str,
    pub current_system_time: String,
    #[serde(flatten)]
    pub stats: HealthStats,
}

/// POST /dashboard - Upload a price CSV, get back the five chart descriptions
///
/// Accepts one multipart field carrying the file. The upload is parsed,
/// derived and described in-place; nothing is stored server-side, so a new
/// upload fully replaces whatever the client rendered before.
#[instrument(skip(health, multipart))]
pub async fn dashboard_handler(
    State(health): State<SharedHealthStats>,
    mut multipart: Multipart,
) -> Response {
    health.write().await.uploads_total += 1;

    let mut payload: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => {
                warn!("Field without filename, skipping");
                continue;
            }
        };

        info!(filename = %filename, "Processing upload");

        let data = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "Failed to read file data");
                return fail(&health, StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file data")
                    .await;
            }
        };

        payload = Some((filename, data.to_vec()));
        break;
    }

    let Some((filename, data)) = payload else {
        return fail(
            &health,
            StatusCode::BAD_REQUEST,
            "No file provided. Upload a CSV with columns Date, Open, High, Low, Close, Adj Close, Volume",
        )
        .await;
    };

    if let Err(message) = validate_file_extension(&filename) {
        return fail(&health, StatusCode::BAD_REQUEST, &message).await;
    }

    if data.len() > MAX_CSV_SIZE {
        return fail(
            &health,
            StatusCode::PAYLOAD_TOO_LARGE,
            &format!("File size exceeds {}MB limit", MAX_CSV_SIZE / (1024 * 1024)),
        )
        .await;
    }

    match build_from_bytes(&data) {
        Ok((rows, dashboard)) => {
            info!(filename = %filename, rows, "Dashboard built");

            let mut stats = health.write().await;
            stats.rows_last_upload = rows;
            stats.last_upload_at = Some(chrono::Utc::now().to_rfc3339());
            drop(stats);

            let response = DashboardResponse {
                success: true,
                rows: Some(rows),
                dashboard: Some(dashboard),
                error: None,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(e) => {
            warn!(filename = %filename, error = %e, "Upload rejected");
            fail(&health, error_status(&e), &e.to_string()).await
        }
    }
}

/// Run the full ingest -> derive -> describe pass over raw CSV bytes
fn build_from_bytes(bytes: &[u8]) -> Result<(usize, Dashboard)> {
    let bars = parse_csv(bytes)?;
    let series = derive(&bars);
    let dashboard = build_dashboard(&series);
    Ok((series.len(), dashboard))
}

/// Map an ingestion error to its HTTP status
fn error_status(err: &AppError) -> StatusCode {
    match err {
        AppError::Schema(_) | AppError::Parse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Validate the uploaded file extension
fn validate_file_extension(filename: &str) -> std::result::Result<(), String> {
    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    if extension.is_empty() {
        return Err("File must have an extension".to_string());
    }

    if !ALLOWED_CSV_EXTS.contains(&extension.as_str()) {
        return Err(format!(
            "Invalid file extension. Expected: {}",
            ALLOWED_CSV_EXTS.join(", ")
        ));
    }

    Ok(())
}

/// Record the failure and build the error response
async fn fail(health: &SharedHealthStats, status: StatusCode, message: &str) -> Response {
    health.write().await.uploads_failed += 1;
    error_response(status, message)
}

/// Build error response
fn error_response(status: StatusCode, message: &str) -> Response {
    let response = DashboardResponse {
        success: false,
        rows: None,
        dashboard: None,
        error: Some(message.to_string()),
    };

    (status, axum::Json(response)).into_response()
}

/// GET / - serves the dashboard page
#[instrument]
pub async fn index_handler() -> impl IntoResponse {
    let public_dir = get_public_dir();
    let index_path = public_dir.join("index.html");

    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => {
            debug!("Serving dashboard UI from {}", index_path.display());
            Html(html).into_response()
        }
        Err(e) => {
            warn!(error = %e, path = %index_path.display(), "Failed to read index.html");
            (
                StatusCode::NOT_FOUND,
                Html("<h1>Dashboard not found</h1><p>Unable to load the dashboard page.</p>"),
            )
                .into_response()
        }
    }
}

/// GET /health - Health statistics endpoint
#[instrument(skip(health))]
pub async fn health_handler(State(health): State<SharedHealthStats>) -> impl IntoResponse {
    debug!("Received request for health stats");

    let stats = health.read().await.clone();

    let response = HealthResponse {
        version: env!("CARGO_PKG_VERSION"),
        current_system_time: chrono::Utc::now().to_rfc3339(),
        stats,
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("prices.csv").is_ok());
        assert!(validate_file_extension("prices.CSV").is_ok());
        assert!(validate_file_extension("prices.txt").is_ok());
        assert!(validate_file_extension("prices.xlsx").is_err());
        assert!(validate_file_extension("prices").is_err());
    }

    #[test]
    fn test_error_status_mapping() {
        let schema = AppError::Schema("missing required column: Volume".to_string());
        assert_eq!(error_status(&schema), StatusCode::UNPROCESSABLE_ENTITY);

        let parse = AppError::Parse { row: 3, message: "bad date".to_string() };
        assert_eq!(error_status(&parse), StatusCode::UNPROCESSABLE_ENTITY);

        let io = AppError::Io("disk gone".to_string());
        assert_eq!(error_status(&io), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_build_from_bytes_end_to_end() {
        let csv = "Date,Open,High,Low,Close,Adj Close,Volume\n\
                   2024-01-02,10,11,9,10.5,10.5,1000\n\
                   2024-01-03,10.5,12,10,11,11,2000\n";
        let (rows, dashboard) = build_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(rows, 1);
        assert_eq!(dashboard.price_line.dates.len(), 1);
    }
}
