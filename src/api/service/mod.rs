pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db;

#[derive(Clone)]
pub struct State {
    pub db: db::Database,
}

impl State {
    pub fn new(db: crate::db::Database) -> Self {
        Self { db }
    }
}

impl axum::extract::FromRef<State> for sqlx::SqlitePool {
    fn from_ref(input: &State) -> Self {
        input.db.pool.clone()
    }
}

pub struct ApiError {
    status: StatusCode,
    body: types::ErrorResponse,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: types::ErrorResponse {
                error: message.into(),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: types::ErrorResponse {
                error: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        log::warn!("db returned error: {value}");
        ApiError::internal(format!("db returned error: {value}"))
    }
}
