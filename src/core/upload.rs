//! Upload Service
//!
//! Accepts a single multipart file upload, stores it in the uploads
//! directory under a timestamp-prefixed name, and serves stored files back
//! as static resources.
//!
//! ## Endpoints
//! - `POST /upload` - multipart form field `file`
//! - `GET /files/{storedName}` - previously uploaded bytes, as-is
//! - `GET /health` - health check

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("Malformed upload request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Storage write failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            UploadError::MissingFile | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

// ============================================================================
// Types
// ============================================================================

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    /// Stored name, distinct from the uploader-supplied original name.
    pub filename: String,
    /// Access path under which the stored bytes are servable.
    pub path: String,
}

/// Shared state for the upload routes.
#[derive(Debug, Clone)]
pub struct UploadState {
    /// Directory served under `/files`.
    pub uploads_dir: PathBuf,
    /// Directory in-progress writes land in; never served.
    pub staging_dir: PathBuf,
}

// ============================================================================
// Stored-Name Policy
// ============================================================================

/// Derive the on-disk name for an upload.
///
/// A unix-millisecond timestamp prefix keeps repeated uploads of the same
/// original name from clobbering each other. This is a heuristic, not a
/// guarantee: two same-named uploads within the same millisecond still
/// collide, and the later write wins. The original name is reduced to its
/// final path component so client-supplied paths cannot escape the uploads
/// directory.
pub fn stored_name(original: &str, timestamp_millis: i64) -> String {
    let base = Path::new(original)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    format!("{timestamp_millis}-{base}")
}

/// Staging directory adjacent to the uploads directory. Sharing a parent
/// keeps the two on the same filesystem, so the final rename stays atomic,
/// while nothing under staging is reachable through `/files`.
pub fn staging_dir_for(uploads_dir: &Path) -> PathBuf {
    let mut name = uploads_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| std::ffi::OsString::from("uploads"));
    name.push(".staging");
    uploads_dir.with_file_name(name)
}

// ============================================================================
// Upload Service
// ============================================================================

/// HTTP upload service: bind, serve, and shut down gracefully via a oneshot
/// channel.
pub struct UploadService {
    port: u16,
    uploads_dir: PathBuf,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl UploadService {
    pub fn new(port: u16, uploads_dir: PathBuf) -> Self {
        Self {
            port,
            uploads_dir,
            shutdown_tx: None,
        }
    }

    /// Base URL the service is reachable at.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Bind the listener, create the uploads directory if absent, and spawn
    /// the server task. Errors here (port in use, unwritable directory) are
    /// startup failures and propagate to the caller.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        if self.shutdown_tx.is_some() {
            anyhow::bail!("upload service already running");
        }

        let staging_dir = staging_dir_for(&self.uploads_dir);
        tokio::fs::create_dir_all(&self.uploads_dir).await?;
        tokio::fs::create_dir_all(&staging_dir).await?;

        let app = router(UploadState {
            uploads_dir: self.uploads_dir.clone(),
            staging_dir,
        });

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        tokio::spawn(async move {
            log::info!("Upload service listening on http://{addr}");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                    log::info!("Upload service shutting down");
                })
                .await
                .ok();
        });

        self.shutdown_tx = Some(shutdown_tx);
        Ok(())
    }

    /// Stop the service.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            log::info!("Upload service stopped");
        }
    }

    /// Check if the service is running.
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }
}

/// Build the service router. Exposed separately so tests can drive it
/// without binding a socket.
pub fn router(state: UploadState) -> Router {
    let files = ServeDir::new(state.uploads_dir.clone());
    Router::new()
        .route("/upload", post(upload))
        .route("/health", get(health_check))
        .nest_service("/files", files)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(Arc::new(state))
}

// ============================================================================
// HTTP Handlers
// ============================================================================

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Upload endpoint. Reads the `file` multipart field, stores it under a
/// collision-avoided name, and returns the access path.
async fn upload(
    State(state): State<Arc<UploadState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut payload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await?;
        payload = Some((original, data));
        break;
    }

    let (original, data) = payload.ok_or(UploadError::MissingFile)?;

    let name = stored_name(&original, chrono::Utc::now().timestamp_millis());
    store_bytes(&state.staging_dir, &state.uploads_dir, &name, &data).await?;
    log::info!("Stored upload {original:?} as {name} ({} bytes)", data.len());

    Ok(Json(UploadResponse {
        message: "File uploaded successfully!".to_string(),
        filename: name.clone(),
        path: format!("/files/{name}"),
    }))
}

/// Write the payload into the staging directory and rename it into the
/// served directory, so an in-progress or failed write is never servable,
/// not even for the duration of the write itself.
async fn store_bytes(
    staging: &Path,
    uploads: &Path,
    name: &str,
    data: &[u8],
) -> Result<(), std::io::Error> {
    let tmp = staging.join(name);
    let dest = uploads.join(name);
    if let Err(e) = tokio::fs::write(&tmp, data).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e);
    }
    tokio::fs::rename(&tmp, &dest).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_name_prefixes_timestamp() {
        assert_eq!(
            stored_name("User_Manual.pdf", 1700000000000),
            "1700000000000-User_Manual.pdf"
        );
    }

    #[test]
    fn test_stored_name_distinct_from_original() {
        let name = stored_name("report.docx", 42);
        assert_ne!(name, "report.docx");
        assert!(name.ends_with("-report.docx"));
    }

    #[test]
    fn test_stored_name_strips_directories() {
        assert_eq!(stored_name("../../etc/passwd", 7), "7-passwd");
        assert_eq!(stored_name("a/b/c.txt", 7), "7-c.txt");
    }

    #[test]
    fn test_stored_name_fallback_for_empty_name() {
        assert_eq!(stored_name("", 7), "7-upload");
        assert_eq!(stored_name("..", 7), "7-upload");
    }

    #[test]
    fn test_staging_dir_is_sibling_of_uploads() {
        let staging = staging_dir_for(Path::new("/data/uploads"));
        assert_eq!(staging, PathBuf::from("/data/uploads.staging"));
        assert!(!staging.starts_with("/data/uploads"));
    }

    #[tokio::test]
    async fn test_store_bytes_moves_out_of_staging() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let staging = staging_dir_for(&uploads);
        std::fs::create_dir_all(&uploads).unwrap();
        std::fs::create_dir_all(&staging).unwrap();

        store_bytes(&staging, &uploads, "1-a.txt", b"hello")
            .await
            .unwrap();
        assert_eq!(std::fs::read(uploads.join("1-a.txt")).unwrap(), b"hello");
        assert_eq!(std::fs::read_dir(&staging).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_store_bytes_missing_staging_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        std::fs::create_dir_all(&uploads).unwrap();
        let missing = dir.path().join("nope");
        let err = store_bytes(&missing, &uploads, "1-a.txt", b"hello").await;
        assert!(err.is_err());
    }
}
