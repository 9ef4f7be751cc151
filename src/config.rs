// src/config.rs

use std::env;
use std::path::PathBuf;
use dotenvy::dotenv;

/// Which persistence backend holds the feedback collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process memory only. Lost on restart.
    Memory,
    /// A single JSON document rewritten on every append.
    File,
}

impl StoreBackend {
    /// Parses the `STORE_BACKEND` value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Some(StoreBackend::Memory),
            "file" | "json" => Some(StoreBackend::File),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub data_path: PathBuf,
    pub cors_origins: Vec<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            store_backend: StoreBackend::File,
            data_path: PathBuf::from("data/db.json"),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `.env` and the process environment.
    ///
    /// Invalid values fall back to defaults; the returned warnings describe
    /// each fallback so they can be logged once tracing is initialized.
    pub fn from_env() -> (Self, Vec<String>) {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warnings.push(format!("Invalid PORT '{}', using {}", raw, defaults.port));
                defaults.port
            }),
            None => defaults.port,
        };

        let store_backend = match get("STORE_BACKEND") {
            Some(raw) => StoreBackend::parse(&raw).unwrap_or_else(|| {
                warnings.push(format!("Unknown STORE_BACKEND '{}', falling back to file", raw));
                StoreBackend::File
            }),
            None => defaults.store_backend,
        };

        let data_path = get("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let cors_origins = get("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.cors_origins);

        let rust_log = get("RUST_LOG").unwrap_or(defaults.rust_log);

        let config = Self {
            port,
            store_backend,
            data_path,
            cors_origins,
            rust_log,
        };
        (config, warnings)
    }
}

/// Splits a comma separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
