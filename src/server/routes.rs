//! Route table for the web interface.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::{handlers, AppState};

/// Build the application router over shared state.
///
/// The path -> access-policy mapping lives in
/// [`crate::session::gate::policy_for_path`]; each handler enforces its own
/// policy so the check runs on every request.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/login", get(handlers::login_form).post(handlers::login_submit))
        .route(
            "/register",
            get(handlers::register_form).post(handlers::register_submit),
        )
        .route("/logout", post(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route(
            "/document-simplifier",
            get(handlers::document_simplifier).post(handlers::analyze_document),
        )
        .route("/lawyer-connect", get(handlers::lawyer_connect))
        .route("/ipc-simplifier", get(handlers::ipc_simplifier))
        .route("/case-hierarchy", get(handlers::case_hierarchy))
        .route("/admin", get(handlers::admin_panel))
        .route("/profile", get(handlers::profile))
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
