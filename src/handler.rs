use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use tracing::info;

use crate::api::{StatusResponse, success};
use crate::assets::Assets;
use crate::light::LightStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LightStore>,
    pub api_base: Arc<str>,
}

impl AppState {
    pub fn new(store: LightStore, api_base: &str) -> Self {
        AppState {
            store: Arc::new(store),
            api_base: Arc::from(api_base),
        }
    }
}

const API_BASE_PLACEHOLDER: &str = "{{api_base}}";

pub async fn healthcheck() -> Response {
    info!("got healthcheck request");
    success(StatusResponse {
        status: "ok".to_string(),
    })
}

/// Control panel page with the API mount point filled in.
pub async fn serve_index(State(state): State<AppState>) -> Response {
    let Some(page) = Assets::get("index.html") else {
        tracing::error!("index.html missing from embedded assets");
        return StatusCode::NOT_FOUND.into_response();
    };

    let html = String::from_utf8_lossy(&page.data);
    // The page appends "/lights" itself, so the root mounts as an empty prefix.
    let api_base = state.api_base.trim_end_matches('/');
    Html(html.replace(API_BASE_PLACEHOLDER, api_base)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_fills_api_base() {
        let state = AppState::new(LightStore::new(), "/api");
        let response = serve_index(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"data-api-base="/api""#));
        assert!(!html.contains(API_BASE_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_index_at_root_uses_empty_prefix() {
        let state = AppState::new(LightStore::new(), "/");
        let html = body_text(serve_index(State(state)).await).await;
        assert!(html.contains(r#"data-api-base="""#));
    }
}
