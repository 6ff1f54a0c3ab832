use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web"]
pub struct Assets;

/// Serves a file from the embedded `web/static` folder.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = format!("static/{}", path.trim_start_matches('/'));

    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data.into_owned()),
            )
                .into_response()
        }
        None => {
            tracing::debug!(path = %path, "static asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
