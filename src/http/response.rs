//! Response mapping.
//!
//! # Responsibilities
//! - Turn application replies into HTTP responses
//! - Map application errors to status codes
//!
//! # Design Decisions
//! - Lookup failures are 404, everything else 500
//! - Out-of-range reply statuses become 500 instead of panicking

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app::{AppError, Reply, ReplyBody};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body {
            ReplyBody::Text(text) => (status, text).into_response(),
            ReplyBody::Json(value) => (status, Json(value)).into_response(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.to_string()).into_response()
    }
}
