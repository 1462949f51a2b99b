/// Gateway configuration
///
/// # Environment
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first by the binary):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 3000 | Listen port |
/// | BACKEND_URL | http://localhost:8000 | Origin that `/api`, `/auth` and `/health` are forwarded to |
/// | STATIC_DIR | dist | Built front end, served with SPA fallback |
/// | STRIP_API_PREFIX | false | Forward `/api/x` as `/x` |
/// | REQUEST_TIMEOUT_MS | 30000 | Upstream request timeout |
/// | LOG_LEVEL | info | Default filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// BACKEND_URL=https://hr.example.com PORT=8080 cargo run -p hr-gateway
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// Backend origin, without trailing slash
    pub backend_url: String,
    /// Static asset directory
    pub static_dir: String,
    /// Drop the `/api` prefix before forwarding
    pub strip_api_prefix: bool,
    /// Upstream request timeout (ms)
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            backend_url: std::env::var("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into()),
            strip_api_prefix: std::env::var("STRIP_API_PREFIX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the backend and static directory
    ///
    /// Mostly used by tests
    pub fn with_overrides(backend_url: impl Into<String>, static_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.backend_url = backend_url.into().trim_end_matches('/').to_string();
        config.static_dir = static_dir.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = Config::with_overrides("http://backend:9000/", "/tmp/dist");
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.static_dir, "/tmp/dist");
    }

    #[test]
    fn test_environment_predicates() {
        let mut config = Config::with_overrides("http://b", "dist");
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
