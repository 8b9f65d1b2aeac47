//! Minimal web chat server - Library exports for testing
//!
//! (c) Softlandia 2025

pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

use crate::core::services::RoomChatService;
use crate::core::templates::Templates;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::repositories::DbMessageRepository;
use axum::Router;
use di::{Injectable, ServiceCollection, ServiceProvider, ValidationError, existing_as_self};
use di_axum::RouterServiceProviderExtensions;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Registers the pooled connection, the message repository, the chat service and the page
/// templates.
pub fn service_provider(
    connection: DatabaseConnection,
) -> Result<ServiceProvider, ValidationError> {
    ServiceCollection::new()
        .add(existing_as_self(connection))
        .add(DbMessageRepository::scoped())
        .add(RoomChatService::scoped())
        .add(Templates::singleton())
        .build_provider()
}

/// Pages, the messages endpoint and static files.
pub fn routes(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(api::pages::router())
        .nest("/messages", api::messages::router())
        .nest_service("/static", ServeDir::new(static_dir))
}

/// Request tracing, panic recovery and the service provider, applied around `router`.
pub fn with_middleware(router: Router, provider: ServiceProvider) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(api::handle_panic)),
        )
        .with_provider(provider)
}

pub fn app(provider: ServiceProvider, static_dir: impl AsRef<Path>) -> Router {
    with_middleware(routes(static_dir), provider)
}
