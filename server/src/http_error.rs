use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vidqueue_core::queue::QueueError;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    report: eyre::Report,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

// Tell axum how to convert `HttpError` into a response.
impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(report = ?self.report, "Error handling request");
        }
        let body = ErrorBody {
            error: format!("{}", self.report),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<QueueError> for HttpError {
    fn from(err: QueueError) -> Self {
        let status = match &err {
            QueueError::Validation(_) => StatusCode::BAD_REQUEST,
            QueueError::NotFound(_) => StatusCode::NOT_FOUND,
            QueueError::Conflict { .. } => StatusCode::CONFLICT,
            QueueError::Filesystem { .. } | QueueError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        HttpError {
            status,
            report: err.into(),
        }
    }
}

macro_rules! impl_from {
    ($from:ty) => {
        impl From<$from> for HttpError {
            fn from(err: $from) -> Self {
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    report: err.into(),
                }
            }
        }
    };
}

impl_from!(color_eyre::Report);

pub type ApiResult<T> = Result<T, HttpError>;

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.report)
    }
}
