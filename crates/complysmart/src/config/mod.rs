use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use url::Url;

pub const DEFAULT_AUDIT_API_URL: &str = "https://fingenius-ai-fastapi-0rad.onrender.com";
const DEFAULT_AUDIT_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub audit_api: AuditApiConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            audit_api: AuditApiConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the remote audit and Q&A service.
#[derive(Debug, Clone)]
pub struct AuditApiConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

impl AuditApiConfig {
    /// Reads `COMPLY_API_URL` and `COMPLY_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = env::var("COMPLY_API_URL").unwrap_or_else(|_| DEFAULT_AUDIT_API_URL.to_string());
        let base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw_url.clone(),
            source,
        })?;

        let timeout_secs = match env::var("COMPLY_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_AUDIT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

impl Default for AuditApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_AUDIT_API_URL).expect("default audit url is valid"),
            timeout_secs: DEFAULT_AUDIT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidApiUrl { value: String, source: url::ParseError },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidApiUrl { value, .. } => {
                write!(f, "COMPLY_API_URL '{}' is not an absolute URL", value)
            }
            ConfigError::InvalidTimeout => {
                write!(f, "COMPLY_API_TIMEOUT_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidApiUrl { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("COMPLY_API_URL");
        env::remove_var("COMPLY_API_TIMEOUT_SECS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.audit_api.base_url.as_str(),
            "https://fingenius-ai-fastapi-0rad.onrender.com/"
        );
        assert_eq!(config.audit_api.timeout_secs, 30);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn audit_api_overrides_are_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        env::set_var("COMPLY_API_URL", "http://127.0.0.1:8000/v2");
        env::set_var("COMPLY_API_TIMEOUT_SECS", "5");
        let config = AuditApiConfig::from_env().expect("overrides load");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/v2");
        assert_eq!(config.timeout_secs, 5);

        env::set_var("COMPLY_API_TIMEOUT_SECS", "0");
        assert!(matches!(
            AuditApiConfig::from_env(),
            Err(ConfigError::InvalidTimeout)
        ));

        env::set_var("COMPLY_API_URL", "not a url");
        assert!(matches!(
            AuditApiConfig::from_env(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));

        reset_env();
    }
}
