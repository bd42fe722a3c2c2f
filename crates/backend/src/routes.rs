use axum::{http::header, http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::a001_medical_records::service::RecordsService;
use crate::handlers;
use crate::shared::request_log::request_logger;

/// Shared, immutable server state
pub struct AppState {
    pub records: RecordsService,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/medical-records",
            get(handlers::a001_medical_records::get_medical_records),
        )
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
