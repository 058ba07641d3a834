//! # Email Configuration Service
//!
//! `POST /uploadEmailConfig` stores the client's `{title, content, imageUrl}`
//! snapshot. Every save is a new row; nothing is updated in place.
//!
//! - `save`: the HTTP handler.
//! - `store`: SQLite schema and queries.

mod save;
pub mod store;

use actix_web::web;
use common::requests::UPLOAD_EMAIL_CONFIG;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(UPLOAD_EMAIL_CONFIG, web::post().to(save::process));
}
