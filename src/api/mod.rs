use crate::api::error::AppError;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use log::error;
use std::any::Any;

pub mod error;
pub mod messages;
pub mod pages;
pub mod session;

/// `302 Found` to `uri`.
pub fn found(uri: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, uri)]).into_response()
}

/// Turns a panicking handler into a 500 so the server keeps serving other requests.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("handler panicked: {detail}");

    AppError::Internal.into_response()
}
