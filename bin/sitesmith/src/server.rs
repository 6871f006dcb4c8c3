//! Embedded generation, download and preview server.
//!
//! Thin HTTP glue over the generator: JSON endpoints for template lookup and
//! generation, plus archive download and lazily extracted previews. Error
//! messages are surfaced to the caller; this is a developer-facing tool.

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sitesmith_core::Config;
use sitesmith_generator::{
    archive_site, extract_archive, GenerateError, GenerationRequest, Generator, TemplateStore,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info};
use uuid::Uuid;

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only template store, shared across requests.
    pub store: Arc<TemplateStore>,

    /// Generator writing under the configured sites directory.
    pub generator: Generator,

    /// Directory of downloadable archives, one zip per generation id.
    pub archives_dir: PathBuf,

    /// Directory of extracted previews, one subdirectory per generation id.
    pub preview_dir: PathBuf,

    /// Theme applied when a request names none.
    pub default_theme: String,
}

impl AppState {
    /// Build server state from configuration and a loaded store.
    #[must_use]
    pub fn new(store: Arc<TemplateStore>, config: &Config) -> Self {
        let generator = Generator::new(store.clone(), &config.output.sites_dir);
        Self {
            store,
            generator,
            archives_dir: PathBuf::from(&config.output.archives_dir),
            preview_dir: PathBuf::from(&config.output.preview_dir),
            default_theme: config.generator.default_theme.clone(),
        }
    }
}

/// Wire form of a generation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    /// Required template-type; its absence is a 400, not a deserialization
    /// failure, so the caller gets a useful message.
    pub template_type: Option<String>,

    #[serde(default)]
    pub selected_pages: Vec<String>,

    pub selected_theme: Option<String>,

    #[serde(default)]
    pub selected_features: Vec<String>,
}

/// Successful generation response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub generation_id: String,
    pub download_url: String,
    pub preview_url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Create the application router.
///
/// When `static_dir` is set, front-end assets are served from it as the
/// fallback, mirroring the API-plus-static layout of the original tool.
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/api/templates", get(list_templates))
        .route("/api/templates/{kind}", get(get_template))
        .route("/api/generate", post(generate_site))
        .route("/api/download/{id}", get(download_site))
        .route("/api/preview/{id}", get(preview_index))
        .route("/api/preview/{id}/{*path}", get(preview_resource));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Return all available template definitions.
async fn list_templates(State(state): State<AppState>) -> Response {
    Json(state.store.all().clone()).into_response()
}

/// Return a specific template definition.
async fn get_template(State(state): State<AppState>, AxumPath(kind): AxumPath<String>) -> Response {
    match state.store.get(&kind) {
        Some(definition) => Json(definition.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Template not found"),
    }
}

/// Generate a website, archive it, and hand back download/preview URLs.
async fn generate_site(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Response {
    let Some(template_type) = body.template_type else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required field: templateType",
        );
    };

    let theme = body
        .selected_theme
        .unwrap_or_else(|| state.default_theme.clone());
    let request = GenerationRequest::new(template_type)
        .with_pages(body.selected_pages)
        .with_theme(theme)
        .with_features(body.selected_features);

    let result = match state.generator.generate(&request) {
        Ok(result) => result,
        Err(GenerateError::TemplateNotFound(kind)) => {
            return error_response(StatusCode::NOT_FOUND, format!("Template '{kind}' not found"));
        }
        Err(e) => {
            error!(error = %e, "generation failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let generation_id = Uuid::new_v4();
    let zip_path = state.archives_dir.join(format!("{generation_id}.zip"));
    if let Err(e) = archive_site(&result.site_dir, &zip_path) {
        error!(error = %e, "archiving failed");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    info!(
        id = %generation_id,
        pages = result.pages_written,
        "generation complete"
    );

    Json(GenerateResponse {
        success: true,
        generation_id: generation_id.to_string(),
        download_url: format!("/api/download/{generation_id}"),
        preview_url: format!("/api/preview/{generation_id}"),
    })
    .into_response()
}

/// Download the generated website as a zip file.
async fn download_site(State(state): State<AppState>, AxumPath(id): AxumPath<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid generation id");
    };

    let zip_path = state.archives_dir.join(format!("{id}.zip"));
    match tokio::fs::read(&zip_path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/zip"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"website.zip\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => error_response(StatusCode::NOT_FOUND, "File not found"),
    }
}

/// Serve the root document of a preview.
async fn preview_index(State(state): State<AppState>, AxumPath(id): AxumPath<String>) -> Response {
    let dest = match ensure_extracted(&state, &id).await {
        Ok(dest) => dest,
        Err(response) => return response,
    };

    match tokio::fs::read_to_string(dest.join("index.html")).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => error_response(StatusCode::NOT_FOUND, "Preview has no index document"),
    }
}

/// Serve a nested asset of a preview.
async fn preview_resource(
    State(state): State<AppState>,
    AxumPath((id, resource)): AxumPath<(String, String)>,
) -> Response {
    let dest = match ensure_extracted(&state, &id).await {
        Ok(dest) => dest,
        Err(response) => return response,
    };

    if !is_safe_resource(&resource) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid resource path");
    }

    let path = dest.join(&resource);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(_) => error_response(StatusCode::NOT_FOUND, "Resource not found"),
    }
}

/// Extract the archive for a generation id once, returning the preview root.
///
/// Extraction is synchronous zip work, so it runs on the blocking pool
/// rather than a runtime worker.
async fn ensure_extracted(state: &AppState, id: &str) -> Result<PathBuf, Response> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Err(error_response(StatusCode::BAD_REQUEST, "Invalid generation id"));
    };

    let dest = state.preview_dir.join(id.to_string());
    if dest.is_dir() {
        return Ok(dest);
    }

    let zip_path = state.archives_dir.join(format!("{id}.zip"));
    if !zip_path.exists() {
        return Err(error_response(StatusCode::NOT_FOUND, "Preview not found"));
    }

    let extract_dest = dest.clone();
    match tokio::task::spawn_blocking(move || extract_archive(&zip_path, &extract_dest)).await {
        Ok(Ok(())) => Ok(dest),
        Ok(Err(e)) => {
            error!(error = %e, "preview extraction failed");
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "preview extraction task failed");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Preview extraction failed",
            ))
        }
    }
}

/// Only plain relative components are allowed in preview resource paths.
fn is_safe_resource(resource: &str) -> bool {
    let path = Path::new(resource);
    path.components().all(|c| matches!(c, Component::Normal(_)))
}

/// Content type from file extension; previews only hold site assets.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
