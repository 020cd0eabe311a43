//! HTTP error mapping.

use crate::http::dto::ErrorBody;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use notedesk_core::NoteServiceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Internal(_) => "internal",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::InvalidRequest(message) | Self::Internal(message) => {
                message
            }
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl Error for ApiError {}

impl From<NoteServiceError> for ApiError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::NoteNotFound(id) => Self::NotFound(format!("note not found: {id}")),
            NoteServiceError::Repo(err) => {
                error!("event=note_service module=http status=error error={err}");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            status: status.as_u16(),
            error: self.code().to_string(),
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
