use axum::{
    Router,
    http::Method,
    routing::get,
};
use std::error::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::App;
use crate::handler::{AppState, healthcheck, serve_index};

pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod light;
pub mod model;

/// Where the OpenAPI document is served; the UI lives under `/swagger`.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Assembles the full service: landing page, static assets, Swagger UI, and
/// the lights API mounted under the configured base path.
pub fn router(state: AppState, cfg: &App) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let base_path = cfg.get_base_path();
    let api = if base_path == "/" {
        light::routes()
    } else {
        Router::new().nest(&base_path, light::routes())
    };

    let app = Router::new()
        .route("/", get(serve_index))
        .route("/health", get(healthcheck))
        .merge(api)
        .merge(SwaggerUi::new("/swagger").url(OPENAPI_PATH, light::openapi(&base_path)));

    let app = match &cfg.static_dir {
        Some(dir) => app.nest_service("/static", ServeDir::new(dir)),
        None => app.route("/static/*path", get(assets::serve_static)),
    };

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn unpack_error(err: &dyn Error) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
