//! HTTP layer powered by Axum.
//!
//! `POST /analyze` classifies the `text` field of a JSON body, `GET /health`
//! reports liveness. Every failure is reported as `{"error": "..."}`.

use crate::config::ServerConfig;
use crate::core::classifier::SentimentClassifier;
use crate::core::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, PolarityScorer};
use crate::domain::model::HealthResponse;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::normalize_origin;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<SentimentClassifier<Box<dyn PolarityScorer>>>,
}

impl AppState {
    pub fn new<S: PolarityScorer + 'static>(scorer: S) -> Self {
        let scorer: Box<dyn PolarityScorer> = Box::new(scorer);
        Self {
            classifier: Arc::new(SentimentClassifier::new(scorer)),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        } else {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the API router for `config`.
///
/// Fails only if a configured CORS origin is not a bare `scheme://host[:port]`.
pub fn router(state: AppState, config: &ServerConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            let normalized = normalize_origin("cors.allowed_origins", origin)?;
            HeaderValue::from_str(&normalized).map_err(|e| ServiceError::InvalidConfigValueError {
                field: "cors.allowed_origins".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

async fn analyze(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(request) = payload.map_err(rejection_to_error)?;
    let sentiment = state.classifier.classify(request.text())?;
    Ok(Json(AnalyzeResponse { sentiment }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Malformed or mistyped bodies are plain client errors (400); axum's other
/// rejection statuses (415, 413) are kept.
fn rejection_to_error(rejection: JsonRejection) -> ServiceError {
    let status = match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::BAD_REQUEST
        }
        other => other.status(),
    };

    ServiceError::RequestBodyError {
        message: rejection.body_text(),
        status: status.as_u16(),
    }
}
