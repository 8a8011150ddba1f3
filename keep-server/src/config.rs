//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port the API binds to
    pub http_port: u16,
    /// Environment: development | production
    pub environment: String,
    /// Verbose logging toggle (env: DEBUG)
    pub debug: bool,
    /// Origin allowed by CORS (the frontend dev server)
    pub cors_allowed_origin: String,
}

/// Parse a boolean env value the way the frontend tooling does:
/// `1`, `true`, `on`, `yes` (case-insensitive, trimmed) are truthy.
pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// Read a secret from a file, trimming the trailing newline most secret
/// stores append.
pub(crate) fn read_secret_file(path: &str) -> Result<String, BoxError> {
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

/// `DATABASE_URL_FILE` (a mounted secret, e.g. `/run/secrets/database_url`)
/// takes precedence over a plain `DATABASE_URL`.
fn database_url_from_env() -> Result<String, BoxError> {
    if let Ok(path) = std::env::var("DATABASE_URL_FILE") {
        return read_secret_file(&path);
    }
    std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL or DATABASE_URL_FILE must be set".into())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: database_url_from_env()?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            debug: std::env::var("DEBUG")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
        })
    }
}
