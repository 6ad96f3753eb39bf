use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;

use crate::views::layout::render_error_page;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Store unavailable: {_0}")]
    StoreUnavailable(String),

    #[display("Database error: {_0}")]
    Database(String),

    #[display("Session error: {_0}")]
    Session(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Details stay in the log, the visitor only gets the generic page.
        tracing::error!(error = %self, "request failed");

        let status = self.status_code();
        HttpResponse::build(status)
            .insert_header(ContentType::html())
            .body(render_error_page(status))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable(_)
            | AppError::Database(_)
            | AppError::Session(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Configuration(_) => AppError::StoreUnavailable(err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}
