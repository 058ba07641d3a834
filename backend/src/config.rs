//! Server configuration.
//!
//! Read once at startup from `COMPOSER_*` environment variables, falling back
//! to built-in defaults for anything unset.
//!
//! | Variable                | Default            |
//! |-------------------------|--------------------|
//! | `COMPOSER_HOST`         | `127.0.0.1`        |
//! | `COMPOSER_PORT`         | `8080`             |
//! | `COMPOSER_DATA_DIR`     | `./composer-data`  |
//! | `COMPOSER_LAYOUT`       | built-in layout    |
//! | `COMPOSER_OPEN_BROWSER` | `true`             |
//! | `COMPOSER_ALLOWED_ORIGIN` | none (same-origin only) |
//!
//! `COMPOSER_ALLOWED_ORIGIN` is a comma-separated list of origins allowed to
//! call the API from another origin, or `*` for any.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "./composer-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Holds the SQLite database and the `uploads/` directory.
    pub data_dir: PathBuf,
    /// HTML file served by `/getEmailLayout`. `None` serves the built-in layout.
    pub layout_path: Option<PathBuf>,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
    /// Cross-origin callers accepted by the CORS layer. Empty disables it.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            layout_path: None,
            open_browser: true,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("COMPOSER_HOST") {
            config.host = host;
        }
        if let Some(port) = get("COMPOSER_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("COMPOSER_PORT={:?} is not a valid port: {}", port, e))?;
        }
        if let Some(dir) = get("COMPOSER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.layout_path = get("COMPOSER_LAYOUT").map(PathBuf::from);
        if let Some(flag) = get("COMPOSER_OPEN_BROWSER") {
            config.open_browser = parse_bool(&flag)
                .ok_or_else(|| format!("COMPOSER_OPEN_BROWSER={:?} is not a boolean", flag))?;
        }

        if let Some(origins) = get("COMPOSER_ALLOWED_ORIGIN") {
            config.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("composer.sqlite")
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
