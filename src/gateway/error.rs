use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header::CONNECTION},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::resolver::TranslateError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("輸入文字不能為空")]
    EmptyInput,
}

impl From<TranslateError> for GatewayError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::EmptyInput { .. } => GatewayError::EmptyInput,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) | GatewayError::EmptyInput => StatusCode::BAD_REQUEST,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
