use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use image::ImageFormat;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::cache::LibraryCache;
use crate::catalog::sets::known_sets;
use crate::cli::ServeArgs;
use crate::core::report::IdentificationReport;
use crate::matching::identifier::Identifier;
use crate::utils::validation::{validate_image_upload, validate_set_name};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_MULTIPART_FIELDS: usize = 10;
pub const MAX_FILE_FIELD_SIZE: usize = 16 * 1024 * 1024; // 16MB
pub const MAX_TEXT_FIELD_SIZE: usize = 1024;

/// Shared application state
pub struct AppState {
    pub identifier: Identifier,
}

/// Pack image and set name extracted from a multipart form
#[derive(Debug)]
struct UploadData {
    image: Vec<u8>,
    format: ImageFormat,
    pack_name: String,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the routes with security headers, timeouts and body limits.
///
/// Does not include per-IP rate limiting, which needs the peer address from
/// [`Router::into_make_service_with_connect_info`]; see [`create_router`].
pub fn api_router(identifier: Identifier) -> Router {
    let state = Arc::new(AppState { identifier });

    Router::new()
        .route("/identify", post(identify_handler))
        .route("/api/sets", get(sets_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(60),
                ))
                // Limit concurrent requests; each identification holds a library in memory
                .layer(ConcurrencyLimitLayer::new(16))
                // Limit request body size (largest image + multipart overhead)
                .layer(DefaultBodyLimit::max(20 * 1024 * 1024)), // 20MB limit
        )
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(identifier: Identifier) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(2) // 2 requests per second per IP
        .burst_size(10) // Allow bursts of 10 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?;

    Ok(api_router(identifier).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let cache = Arc::new(match &args.images_dir {
        Some(dir) => LibraryCache::with_root(dir),
        None => LibraryCache::new(),
    });
    let app = create_router(Identifier::with_cache(cache))?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting pack-solver web server at http://{addr}");
    tracing::info!("Identification endpoint: POST http://{addr}/identify");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn sets_handler() -> impl IntoResponse {
    Json(known_sets())
}

/// API endpoint for identifying the cards in an uploaded pack image
async fn identify_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let start_time = std::time::Instant::now();

    let upload = match extract_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(error_response) => return error_response,
    };

    // Decoding and matching are CPU-bound
    let result =
        tokio::task::spawn_blocking(move || identify_upload(&state.identifier, &upload)).await;

    let report = match result {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            tracing::error!("Failed to stage uploaded image: {e}");
            return failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process uploaded image",
            );
        }
        Err(e) => {
            tracing::error!("Identification task failed: {e}");
            return failure_response(StatusCode::INTERNAL_SERVER_ERROR, "Identification failed");
        }
    };

    tracing::debug!(
        "Identification finished in {}ms",
        start_time.elapsed().as_millis()
    );

    let status = if report.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(report)).into_response()
}

/// Write the upload to a temporary file and identify it.
///
/// The file is deleted when the `NamedTempFile` drops.
fn identify_upload(
    identifier: &Identifier,
    upload: &UploadData,
) -> std::io::Result<IdentificationReport> {
    let suffix = upload
        .format
        .extensions_str()
        .first()
        .map_or_else(String::new, |ext| format!(".{ext}"));

    let mut temp_file = tempfile::NamedTempFile::with_suffix(&suffix)?;
    temp_file.write_all(&upload.image)?;
    temp_file.flush()?;

    Ok(identifier.identify(temp_file.path(), &upload.pack_name))
}

fn failure_response(status: StatusCode, message: &str) -> Response {
    (status, Json(IdentificationReport::failure(message))).into_response()
}

async fn extract_upload(multipart: &mut Multipart) -> Result<UploadData, Response> {
    let mut image: Option<(Vec<u8>, ImageFormat)> = None;
    let mut pack_name: Option<String> = None;
    let mut fields_received = 0usize;

    loop {
        // Check field count limit before processing
        if fields_received >= MAX_MULTIPART_FIELDS {
            return Err(failure_response(
                StatusCode::BAD_REQUEST,
                "Too many form fields",
            ));
        }

        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed multipart request: {e}");
                return Err(failure_response(
                    StatusCode::BAD_REQUEST,
                    "Malformed multipart request",
                ));
            }
        };
        fields_received += 1;

        let name = field.name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read form field {name}: {e}");
            failure_response(StatusCode::BAD_REQUEST, "Failed to read form field")
        })?;

        match name.as_str() {
            "image" => {
                if bytes.len() > MAX_FILE_FIELD_SIZE {
                    return Err(failure_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "File size exceeds limit",
                    ));
                }
                let format = validate_image_upload(&bytes)
                    .map_err(|e| failure_response(StatusCode::BAD_REQUEST, &e.to_string()))?;
                image = Some((bytes.to_vec(), format));
            }
            "pack_name" => {
                if bytes.len() > MAX_TEXT_FIELD_SIZE {
                    return Err(failure_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "Text field exceeds limit",
                    ));
                }
                let text = String::from_utf8_lossy(&bytes);
                let validated = validate_set_name(&text)
                    .map_err(|e| failure_response(StatusCode::BAD_REQUEST, &e.to_string()))?;
                pack_name = Some(validated.to_string());
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    match (image, pack_name) {
        (Some((image, format)), Some(pack_name)) => Ok(UploadData {
            image,
            format,
            pack_name,
        }),
        _ => Err(failure_response(
            StatusCode::BAD_REQUEST,
            "Missing image or pack_name",
        )),
    }
}
