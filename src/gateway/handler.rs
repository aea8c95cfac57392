use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::CONNECTION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::direction::Direction;
use crate::fallback::ContextLookup;
use crate::gateway::error::GatewayError;
use crate::gateway::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

/// `tokens` echoes the request text; `result` is the translation (or the text itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub tokens: String,
    pub result: String,
}

pub async fn paiwan_to_chinese_handler<F>(
    State(state): State<AppState<F>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: ContextLookup + 'static,
{
    translate(&state, Direction::PaiwanToChinese, request).await
}

pub async fn chinese_to_paiwan_handler<F>(
    State(state): State<AppState<F>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: ContextLookup + 'static,
{
    translate(&state, Direction::ChineseToPaiwan, request).await
}

#[instrument(skip(state, request))]
async fn translate<F>(
    state: &AppState<F>,
    direction: Direction,
    request: serde_json::Value,
) -> Result<Response, GatewayError>
where
    F: ContextLookup + 'static,
{
    let request: TranslateRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    let result = state.translator.resolve(direction, &request.text).await?;
    debug!(input_len = request.text.len(), "Translation complete");

    Ok(make_response(TranslateResponse {
        tokens: request.text,
        result,
    }))
}

pub(crate) fn make_response(body: TranslateResponse) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("close"));

    (StatusCode::OK, headers, Json(body)).into_response()
}
