mod get;

use actix_web::web;
use common::requests::GET_EMAIL_LAYOUT;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(GET_EMAIL_LAYOUT, web::get().to(get::process));
}
