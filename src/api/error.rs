//! Request-level errors and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("login required")]
    NotLoggedIn,

    #[error("could not load messages")]
    MessagesUnavailable,

    #[error("could not save message")]
    MessageNotSaved,

    #[error("could not render page")]
    Render(#[from] minijinja::Error),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyUsername => StatusCode::BAD_REQUEST,
            AppError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            AppError::MessagesUnavailable
            | AppError::MessageNotSaved
            | AppError::Render(_)
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Render(e) = &self {
            error!("{e:#}");
        }

        (self.status(), self.to_string()).into_response()
    }
}
