//! # Image Service
//!
//! - `POST /uploadImage`: multipart upload, field `image`. The bytes are
//!   sniffed to make sure they are an image, stored under their MD5 digest and
//!   the relative URL is returned as `{"imageUrl": "/uploads/<md5>.<ext>"}`.
//! - `GET /uploads/{file}`: serves stored images so those URLs resolve.

mod upload;

use crate::state::AppState;
use actix_files::Files;
use actix_web::web;
use common::requests::{UPLOADS_PATH, UPLOAD_IMAGE};

pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.route(UPLOAD_IMAGE, web::post().to(upload::process))
        .service(Files::new(UPLOADS_PATH, state.uploads_dir.clone()));
}
