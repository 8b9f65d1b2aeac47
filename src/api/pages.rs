//! Home, login and chat pages
//!
//! Unknown paths fall back to the home redirect.

use crate::api::error::AppError;
use crate::api::found;
use crate::api::session::{SessionUser, set_cookie_header};
use crate::core::templates::Templates;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use di_axum::Inject;
use serde::Deserialize;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(login))
        .route("/chat", get(chat))
        .fallback(home)
}

#[derive(Deserialize, Debug)]
pub struct Login {
    #[serde(default)]
    pub username: String,
}

async fn home() -> Response {
    found("/chat")
}

async fn login_form(Inject(templates): Inject<Templates>) -> Result<Html<String>, AppError> {
    Ok(Html(templates.login_page()?))
}

async fn login(Form(login): Form<Login>) -> Result<Response, AppError> {
    if login.username.is_empty() {
        return Err(AppError::EmptyUsername);
    }

    let cookie = set_cookie_header(login.username).map_err(|_| AppError::Internal)?;
    Ok(([(SET_COOKIE, cookie)], found("/chat")).into_response())
}

async fn chat(
    Inject(templates): Inject<Templates>,
    user: Option<SessionUser>,
) -> Result<Response, AppError> {
    match user {
        Some(SessionUser(username)) => Ok(Html(templates.chat_page(&username)?).into_response()),
        None => Ok(found("/login")),
    }
}
