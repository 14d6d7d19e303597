use crate::config::Config;
use crate::image_classifier::interface::ClassifyError;
use crate::library::logger::interface::Logger;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;

const FAILURE_MESSAGE: &str = "Failed to classify image";

#[derive(Debug, Serialize)]
struct RelayError {
    error: String,
}

/// Same-origin front for the classification backend. Stateless apart from the client.
pub struct RelayState {
    client: reqwest::Client,
    backend_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl RelayState {
    pub fn new(
        client: reqwest::Client,
        backend_url: impl Into<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
            logger: logger.with_namespace("relay"),
        }
    }

    fn classify_url(&self) -> String {
        format!("{}/api/classify/", self.backend_url.trim_end_matches('/'))
    }
}

pub fn build_router(state: Arc<RelayState>, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/classify", post(classify))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}

pub async fn serve(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> anyhow::Result<()> {
    let state = Arc::new(RelayState::new(
        reqwest::Client::new(),
        config.backend_url.clone(),
        logger.clone(),
    ));
    let app = build_router(state, config.relay_body_limit_bytes);

    let addr: SocketAddr = config.relay_bind.parse()?;
    let _ = logger.info(&format!(
        "relay listening on {} -> {}",
        addr, config.backend_url
    ));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn classify(
    State(state): State<Arc<RelayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<RelayError>)> {
    match forward(&state, &headers, body).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            let _ = state.logger.error(&format!("Proxy error: {}", e));
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayError {
                    error: FAILURE_MESSAGE.to_string(),
                }),
            ))
        }
    }
}

/// Body and content type go out untouched, so the multipart boundary survives.
async fn forward(state: &RelayState, headers: &HeaderMap, body: Bytes) -> Result<Value, ClassifyError> {
    let mut request = state.client.post(state.classify_url()).body(body);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(ClassifyError::Status(response.status().as_u16()));
    }

    Ok(response.json::<Value>().await?)
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;
