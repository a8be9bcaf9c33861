use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5102`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert starter authors and quotes into an empty database (default: `true`).
    pub seed_database: bool,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Connection attempts at startup before giving up (default: `15`).
    pub max_connect_attempts: u32,
    /// Delay between connection attempts in seconds (default: `3`).
    pub connect_retry_delay_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_retry_delay(&self) -> Duration {
        Duration::from_secs(self.connect_retry_delay_secs)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `5102`                  |
    /// | `CORS_ORIGINS`                | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `SEED_DATABASE`               | `true`                  |
    /// | `DATABASE_URL`                | built from `DB_*` below |
    /// | `DB_HOST`                     | `localhost`             |
    /// | `DB_PORT`                     | `5432`                  |
    /// | `DB_NAME`                     | `MoodQuotesDb`          |
    /// | `DB_USER`                     | `postgres`              |
    /// | `DB_PASSWORD`                 | (empty)                 |
    /// | `DB_CONNECT_MAX_RETRIES`      | `15`                    |
    /// | `DB_CONNECT_RETRY_DELAY_SECS` | `3`                     |
    ///
    /// Panics on unparsable numeric values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "5102")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_database = parse_bool(&var("SEED_DATABASE", "true"))
            .expect("SEED_DATABASE must be true or false");

        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            format!(
                "postgres://{user}:{password}@{host}:{port}/{name}",
                user = var("DB_USER", "postgres"),
                password = var("DB_PASSWORD", ""),
                host = var("DB_HOST", "localhost"),
                port = var("DB_PORT", "5432"),
                name = var("DB_NAME", "MoodQuotesDb"),
            )
        });

        let max_connect_attempts: u32 = var("DB_CONNECT_MAX_RETRIES", "15")
            .parse()
            .expect("DB_CONNECT_MAX_RETRIES must be a valid u32");

        let connect_retry_delay_secs: u64 = var("DB_CONNECT_RETRY_DELAY_SECS", "3")
            .parse()
            .expect("DB_CONNECT_RETRY_DELAY_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_database,
            database: DatabaseConfig {
                url,
                max_connect_attempts,
                connect_retry_delay_secs,
            },
        }
    }

    /// Whether CORS is open to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
