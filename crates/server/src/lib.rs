use api_types::ErrorDetail;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod accounts;
mod categories;
mod named;
mod payees;
mod server;
mod transactions;

pub enum ServerError {
    Engine(EngineError),
    /// The request could not be turned into the handler's input.
    Rejected(StatusCode, String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::BAD_REQUEST,
        EngineError::MissingRow { .. } | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::MissingRow { .. } => {
            tracing::error!("invariant violated: {err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Rejected(status, detail) => (status, detail),
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        // Broken syntax and a missing content type are input errors too;
        // 400 stays reserved for taken names.
        Self::Rejected(StatusCode::UNPROCESSABLE_ENTITY, value.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Rejected(StatusCode::UNPROCESSABLE_ENTITY, value.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::Rejected(StatusCode::UNPROCESSABLE_ENTITY, value.body_text())
    }
}
