use utoipa::OpenApi;
use utoipa::openapi::Server;

use super::handler;
use crate::api::ErrorResponse;
use crate::model::{Light, LightSummary, LightUpdate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lighting Hub API",
        description = "API for interacting with the lighting hub simulator."
    ),
    paths(
        handler::list_lights,
        handler::get_light,
        handler::create_light,
        handler::update_light,
        handler::delete_light
    ),
    components(schemas(Light, LightSummary, LightUpdate, ErrorResponse)),
    tags((name = "lights", description = "Light resources"))
)]
pub struct ApiDoc;

/// OpenAPI document with the API mount point as its only server.
pub fn openapi(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(base_path)]);
    doc
}
