use std::{env, net::SocketAddr};
use tracing::warn;

pub const BACKEND_URL_VAR: &str = "WELLBEING_BACKEND_URL";
pub const FALLBACK_BACKEND_URL: &str = "https://ai-wellbeing-backend-xxxxx.onrender.com";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            backend_url: resolve_backend_url(env::var(BACKEND_URL_VAR).ok()),
            port: resolve_port(env::var("PORT").ok()),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub fn resolve_backend_url(value: Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => {
            warn!("{BACKEND_URL_VAR} is not set, using fallback backend {FALLBACK_BACKEND_URL}");
            FALLBACK_BACKEND_URL.to_string()
        }
    }
}

pub fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
