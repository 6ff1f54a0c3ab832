use axum::{Router, routing::get};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/lights",
            get(handler::list_lights).post(handler::create_light),
        )
        .route(
            "/lights/:id",
            get(handler::get_light)
                .put(handler::update_light)
                .delete(handler::delete_light),
        )
}
