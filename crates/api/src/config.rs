use crate::auth::jwt::JwtConfig;

/// Deployment environment, driving the session cookie's transport
/// attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse from the `APP_ENV` env var. Anything other than `production`
    /// (case-insensitive) is treated as development.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Credentials are allowed, so the session cookie crosses origins.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment (default: development).
    pub environment: Environment,
    /// Session token configuration (secret, lifetime).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                         |
    /// |------------------------|-------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                       |
    /// | `PORT`                 | `5000`                                          |
    /// | `CORS_ORIGINS`         | `http://localhost:5173,http://localhost:5174`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                            |
    /// | `APP_ENV`              | `development`                                   |
    ///
    /// # Panics
    ///
    /// Panics if `ACCESS_TOKEN_SECRET` is unset (see [`JwtConfig::from_env`])
    /// or a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5174".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment: Environment::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
