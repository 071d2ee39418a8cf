use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error(transparent)]
    Upstream(#[from] vox_eleven::Error),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::MissingConfig(name) => {
                tracing::error!(config = %name, "missing_configuration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server misconfiguration".to_string(),
                )
            }
            Self::Upstream(err) => {
                // Provider detail stays in the logs; the client gets a
                // generic failure.
                tracing::error!(error = %err, "speech_synthesis_failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Speech synthesis failed".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
