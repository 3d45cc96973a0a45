use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::system::roles::Role;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::config::get_static_dir;
use crate::state::SharedState;
use crate::system;
use crate::system::auth::middleware::{require_auth, require_roles, RoleGate};
use crate::system::middleware::request_logger::request_logger;

/// Роли, которым доступен справочник пользователей
pub const DIRECTORY_ROLES: &[Role] = &[Role::Admin, Role::Ceo];

/// Конфигурация всех роутов приложения
pub fn configure_routes(app: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn_with_state(app.clone(), require_auth)),
        )
        // User directory (admin / ceo)
        .route(
            "/api/system/users",
            get(system::handlers::users::list).layer(middleware::from_fn_with_state(
                RoleGate::new(app.clone(), DIRECTORY_ROLES),
                require_roles,
            )),
        )
        .with_state(app.clone());

    let router = match get_static_dir(&app.config) {
        Some(dir) => {
            tracing::info!("Serving frontend from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
