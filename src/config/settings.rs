//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Rate limiting configuration
    pub rate_limit: RateLimitSettings,

    /// Message content constraints
    pub message: MessageSettings,

    /// History retention configuration
    pub history: HistorySettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Window duration in milliseconds
    pub window_ms: u64,

    /// Maximum requests per window per client
    pub max_requests: u32,
}

/// Message content constraints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSettings {
    /// Maximum message length in characters
    pub max_length: usize,
}

/// History retention configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of messages retained before the oldest are evicted
    pub max_messages: usize,

    /// Number of messages returned when a list request gives no limit
    pub default_list_limit: usize,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("rate_limit.window_ms", 60_000_i64)?
            .set_default("rate_limit.max_requests", 100)?
            .set_default("message.max_length", 500)?
            .set_default("history.max_messages", 100)?
            .set_default("history.default_list_limit", 10)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option(
                "rate_limit.window_ms",
                std::env::var("RATE_LIMIT_WINDOW_MS").ok(),
            )?
            .set_override_option(
                "rate_limit.max_requests",
                std::env::var("RATE_LIMIT_MAX_REQUESTS").ok(),
            )?
            .set_override_option(
                "message.max_length",
                std::env::var("MAX_MESSAGE_LENGTH").ok(),
            )?
            .set_override_option("history.max_messages", std::env::var("MAX_HISTORY").ok())?
            .build()?
            .try_deserialize()
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".into(),
                port: 3000,
            },
            rate_limit: RateLimitSettings {
                window_ms: 60_000,
                max_requests: 100,
            },
            message: MessageSettings { max_length: 500 },
            history: HistorySettings {
                max_messages: 100,
                default_list_limit: 10,
            },
            cors: CorsSettings {
                allowed_origins: vec!["http://localhost:3000".into()],
            },
            environment: "development".into(),
        }
    }
}
