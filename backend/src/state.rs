//! Shared application state.
//!
//! Built once in `main.rs` from the `ServerConfig` and handed to every handler
//! as `web::Data<AppState>`. It only carries immutable values; handlers open
//! their own SQLite connection per request.

use crate::config::ServerConfig;
use crate::services::email_config::store;
use log::info;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Layout served when `COMPOSER_LAYOUT` is not set.
pub const DEFAULT_LAYOUT: &str = include_str!("../assets/layout.html");

#[derive(Clone)]
pub struct AppState {
    /// Layout HTML returned by `/getEmailLayout`. Read once at startup.
    pub layout: Arc<str>,
    /// Directory uploaded images are written to and served from.
    pub uploads_dir: PathBuf,
    /// SQLite database holding saved email configurations.
    pub database_path: PathBuf,
    /// Origins the CORS layer accepts. Empty means same-origin only.
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Creates the data directories, reads the layout and makes sure the
    /// database schema exists.
    pub fn load(config: &ServerConfig) -> Result<Self, Box<dyn Error>> {
        let uploads_dir = config.uploads_dir();
        fs::create_dir_all(&uploads_dir)?;

        let layout: Arc<str> = match &config.layout_path {
            Some(path) => {
                let html = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read layout {}: {}", path.display(), e))?;
                info!("Using layout from {}", path.display());
                html.into()
            }
            None => DEFAULT_LAYOUT.into(),
        };

        let database_path = config.database_path();
        store::open(&database_path)?;

        Ok(Self {
            layout,
            uploads_dir,
            database_path,
            allowed_origins: config.allowed_origins.clone(),
        })
    }
}
