//! HTTP gateway (Axum) exposing both translation directions.
//!
//! This module is primarily used by the `paiwan` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::{
    TranslateRequest, TranslateResponse, chinese_to_paiwan_handler, paiwan_to_chinese_handler,
};
pub use state::AppState;

use crate::direction::Direction;
use crate::fallback::ContextLookup;

pub const SERVICE_NAME: &str = "paiwan_translation";
pub const HEALTH_PATH: &str = "/health";
pub const PAIWAN_TO_CHINESE_PATH: &str = "/translate/paiwan-to-chinese";
pub const CHINESE_TO_PAIWAN_PATH: &str = "/translate/chinese-to-paiwan";

/// Route serving `direction`.
pub fn translate_path(direction: Direction) -> &'static str {
    match direction {
        Direction::PaiwanToChinese => PAIWAN_TO_CHINESE_PATH,
        Direction::ChineseToPaiwan => CHINESE_TO_PAIWAN_PATH,
    }
}

pub fn create_router_with_state<F>(state: AppState<F>) -> Router
where
    F: ContextLookup + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route(HEALTH_PATH, get(health_handler))
        .route(PAIWAN_TO_CHINESE_PATH, post(paiwan_to_chinese_handler::<F>))
        .route(CHINESE_TO_PAIWAN_PATH, post(chinese_to_paiwan_handler::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct EndpointIndex {
    pub paiwan_to_chinese: String,
    pub chinese_to_paiwan: String,
    pub health: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let endpoints = Direction::ALL
        .iter()
        .map(|direction| translate_path(*direction).to_string())
        .collect();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            endpoints,
        }),
    )
        .into_response()
}

#[tracing::instrument]
pub async fn root_handler() -> Response {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "排灣語雙向翻譯 API 服務".to_string(),
            endpoints: EndpointIndex {
                paiwan_to_chinese: PAIWAN_TO_CHINESE_PATH.to_string(),
                chinese_to_paiwan: CHINESE_TO_PAIWAN_PATH.to_string(),
                health: HEALTH_PATH.to_string(),
            },
        }),
    )
        .into_response()
}
