//! HTTP handlers for the lights API

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};

use crate::api::{ErrorResponse, bad_request, created, no_content, not_found, success};
use crate::error::StoreError;
use crate::handler::AppState;
use crate::model::{Light, LightSummary, LightUpdate};

const INVALID_LIGHT: &str = "invalid light data in body";
const INVALID_FIELDS: &str = "invalid fields in body";

fn store_error(err: StoreError) -> Response {
    match &err {
        StoreError::NotFound(id) => {
            tracing::warn!(id = %id, "light not found");
            not_found(&err.to_string())
        }
        StoreError::DuplicateId(id) => {
            tracing::warn!(id = %id, "light already exists");
            bad_request(&err.to_string())
        }
        StoreError::InvalidUpdate => {
            tracing::warn!("update without any fields");
            bad_request(&err.to_string())
        }
    }
}

/// Get summary of all lights.
#[utoipa::path(
    get,
    path = "/lights",
    tag = "lights",
    operation_id = "get-lights",
    responses(
        (status = 200, description = "Summary of every light", body = [LightSummary])
    )
)]
pub async fn list_lights(State(state): State<AppState>) -> Response {
    let lights = state.store.list();
    tracing::info!(count = lights.len(), "listed lights");
    success(lights)
}

/// Get details about a light.
#[utoipa::path(
    get,
    path = "/lights/{id}",
    tag = "lights",
    operation_id = "get-light-by-id",
    params(("id" = String, Path, description = "ID of light")),
    responses(
        (status = 200, description = "Full state of the light", body = Light),
        (status = 404, description = "light not found", body = ErrorResponse)
    )
)]
pub async fn get_light(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get(&id) {
        Ok(light) => success(light),
        Err(e) => store_error(e),
    }
}

/// Add a light. A missing or empty `id` is assigned by the server.
#[utoipa::path(
    post,
    path = "/lights",
    tag = "lights",
    operation_id = "add-light",
    request_body = Light,
    responses(
        (status = 201, description = "The created light", body = Light),
        (
            status = 400,
            description = "invalid light data in body or duplicate ID",
            body = ErrorResponse
        )
    )
)]
pub async fn create_light(
    State(state): State<AppState>,
    payload: Result<Json<Light>, JsonRejection>,
) -> Response {
    let Json(light) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "rejected light body");
            return bad_request(INVALID_LIGHT);
        }
    };

    match state.store.create(light) {
        Ok(light) => {
            tracing::info!(id = %light.id, "created light");
            created(light)
        }
        Err(e) => store_error(e),
    }
}

/// Update the state of a light. Only the fields present are changed.
#[utoipa::path(
    put,
    path = "/lights/{id}",
    tag = "lights",
    operation_id = "update-light-by-id",
    params(("id" = String, Path, description = "ID of light")),
    request_body = LightUpdate,
    responses(
        (status = 200, description = "The updated light", body = Light),
        (status = 400, description = "invalid fields in body", body = ErrorResponse),
        (status = 404, description = "light not found", body = ErrorResponse)
    )
)]
pub async fn update_light(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<LightUpdate>, JsonRejection>,
) -> Response {
    // An unknown id wins over a bad body.
    if !state.store.contains(&id) {
        return store_error(StoreError::NotFound(id));
    }

    let Json(update) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, id = %id, "rejected update body");
            return bad_request(INVALID_FIELDS);
        }
    };

    match state.store.update(&id, update) {
        Ok(light) => {
            tracing::info!(id = %id, "updated light");
            success(light)
        }
        Err(e) => store_error(e),
    }
}

/// Remove a light.
#[utoipa::path(
    delete,
    path = "/lights/{id}",
    tag = "lights",
    operation_id = "delete-light-by-id",
    params(("id" = String, Path, description = "ID of light")),
    responses(
        (status = 204, description = "Light removed"),
        (status = 404, description = "light not found", body = ErrorResponse)
    )
)]
pub async fn delete_light(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.delete(&id) {
        Ok(()) => {
            tracing::info!(id = %id, "deleted light");
            no_content()
        }
        Err(e) => store_error(e),
    }
}
