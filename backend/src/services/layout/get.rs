//! # Layout Retrieval Service
//!
//! `GET /getEmailLayout` returns the HTML layout the client merges its fields
//! into. The layout is loaded once at startup (see `AppState::load`) and
//! served as-is; placeholder tokens are left for the client to substitute.

use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.layout.to_string())
}
