use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request must be JSON")]
    MalformedBody,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A write the store or the domain refused; the message reaches the client as is.
    #[error("{0}")]
    Rejected(String),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    // keeps the whole context chain, e.g. "Failed to insert pizza X: <sqlite message>"
    pub fn from_store(err: anyhow::Error) -> Self {
        Self::Rejected(format!("{:#}", err))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody | Self::MissingField(_) | Self::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal(err) => error!(error = ?err, "request failed"),
            other => debug!(%status, error = %other, "request rejected"),
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
