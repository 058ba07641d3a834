mod config;
mod services;
mod state;

use crate::config::ServerConfig;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;
    let state = AppState::load(&config).map_err(|e| {
        error!("Cannot prepare data directory {}: {}", config.data_dir.display(), e);
        io::Error::other(e.to_string())
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);
    info!("Storing data in {}", config.data_dir.display());
    if !config.allowed_origins.is_empty() {
        info!("Accepting cross-origin requests from {}", config.allowed_origins.join(", "));
    }

    HttpServer::new(move || {
        App::new()
            .wrap(services::cors(&state.allowed_origins))
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .configure(|cfg| services::configure(cfg, &state))
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
