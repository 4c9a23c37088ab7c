use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::config::get_static_dir;
use crate::shared::state::AppState;
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        // имя файла печатных документов
        .expose_headers([header::CONTENT_DISPOSITION]);

    // ========================================
    // ЗАЩИЩЁННЫЕ РОУТЫ (bearer токен WMS)
    // ========================================
    let protected = Router::new()
        .route("/api/auth/me", get(system::handlers::auth::current_user))
        .route(
            "/api/cycle-count/start",
            post(handlers::usecases::u501_start_cycle_count),
        )
        .route(
            "/api/preparation/start",
            post(handlers::usecases::u502_start_preparation),
        )
        .route(
            "/api/loads/print/label",
            post(handlers::usecases::u503_print_load_label),
        )
        .route(
            "/api/deliveries/print/delivery-note",
            post(handlers::usecases::u504_print_delivery_note),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_auth,
        ));

    let static_dir = get_static_dir(&state.config);
    tracing::info!("Serving static files from {}", static_dir.display());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ПУБЛИЧНЫЕ РОУТЫ
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        // Токен проксируемых запросов проверяет сам WMS API
        .route("/graphql", post(handlers::graphql::proxy))
        .merge(protected)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
        .with_state(state)
}
