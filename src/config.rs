//! Server configuration

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (env: BIND_HOST)
    pub host: String,
    /// HTTP port (env: HTTP_PORT)
    pub http_port: u16,
    /// Environment: development | staging | production (env: ENVIRONMENT)
    pub environment: String,
    /// Seed the store with sample delivery partners on startup
    /// (env: SEED_SAMPLE_DATA, default: on in development)
    pub seed_sample_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let seed_sample_data = std::env::var("SEED_SAMPLE_DATA")
            .ok()
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(environment == "development");

        Self {
            host: std::env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment,
            seed_sample_data,
        }
    }
}
