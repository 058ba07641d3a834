//! Serves the frontend bundle compiled into the binary.
//!
//! Client-side routes fall back to `index.html` so the single-page app
//! handles them. Paths that name a file (they have an extension) and
//! anything under `/uploads` are answered with 404 instead, so a missing
//! image or script never comes back as HTML.

use actix_web::{HttpRequest, HttpResponse};
use common::requests::UPLOADS_PATH;
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;
use std::path::Path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let asset = if path.is_empty() { INDEX } else { path };

    if let Some(file) = STATIC_DIR.get_file(asset) {
        let mime = from_path(asset).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents());
    }

    if !is_app_route(path) {
        debug!("No embedded asset for /{}", path);
        return HttpResponse::NotFound().body("Not Found");
    }

    match STATIC_DIR.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Whether `path` (without the leading `/`) may be a client-side route.
fn is_app_route(path: &str) -> bool {
    let uploads = UPLOADS_PATH.trim_start_matches('/');
    if path == uploads || path.starts_with(&format!("{}/", uploads)) {
        return false;
    }
    Path::new(path).extension().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[test]
    fn only_extensionless_paths_outside_uploads_are_app_routes() {
        assert!(is_app_route(""));
        assert!(is_app_route("compose"));
        assert!(is_app_route("templates/welcome"));
        assert!(is_app_route("uploadsarchive"));

        assert!(!is_app_route("uploads"));
        assert!(!is_app_route("uploads/0cc175b9c0f1b6a831c399e269772661.png"));
        assert!(!is_app_route("uploads/missing"));
        assert!(!is_app_route("favicon.ico"));
        assert!(!is_app_route("assets/app-3f2a.wasm"));
    }

    #[actix_web::test]
    async fn missing_upload_is_not_found() {
        let req = TestRequest::with_uri("/uploads/missing.png").to_http_request();
        let resp = serve_embedded(req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_asset_with_extension_is_not_found() {
        let req = TestRequest::with_uri("/no-such-bundle.js").to_http_request();
        let resp = serve_embedded(req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
