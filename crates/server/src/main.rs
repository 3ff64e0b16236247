use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use responder::{FigletRenderer, Responder};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let commands = settings
        .command_table()
        .context("invalid slash command configuration")?;
    let banners = FigletRenderer::standard()?;
    let state = AppState {
        responder: Arc::new(Responder::new(commands, Box::new(banners))),
    };
    let app = build_router(state, settings.max_body_bytes);

    let addr = settings.bind_addr()?;
    info!(%addr, max_body_bytes = settings.max_body_bytes, "chatbot listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", any(webhook))
        .route("/healthz", get(healthz))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn webhook(State(state): State<AppState>, body: Bytes) -> Response {
    let reply = state.responder.handle(&body);
    debug!(status = reply.status, bytes = reply.body.len(), "webhook reply");
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
