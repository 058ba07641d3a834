//! HTTP surface of the composer backend.
//!
//! - `layout`: `GET /getEmailLayout`
//! - `images`: `POST /uploadImage` and the `/uploads/*` file server
//! - `email_config`: `POST /uploadEmailConfig`
//! - `embedded`: the frontend bundle, used as the default service

pub mod email_config;
pub mod embedded;
pub mod images;
pub mod layout;

use crate::state::AppState;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Condition;
use actix_web::web;

/// Registers the shared state and every route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::Data::new(state.clone()));
    layout::configure_routes(cfg);
    images::configure_routes(cfg, state);
    email_config::configure_routes(cfg);
}

/// CORS layer for a frontend served from another origin.
///
/// Disabled when `origins` is empty. `*` accepts any origin.
pub fn cors(origins: &[String]) -> Condition<Cors> {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);
    if origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }
    Condition::new(!origins.is_empty(), cors)
}
