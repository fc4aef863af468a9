use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the remote job board API, without the `/api` suffix
    pub backend_url: String,

    pub bind_addr: String,
    pub port: u16,

    /// Maximum payload size for all requests (in bytes)
    /// Default: 10MB (10 * 1024 * 1024)
    pub max_payload_size: usize,

    /// Directory for the rolling log files
    pub log_dir: String,

    /// How often the shared job list is reloaded
    pub jobs_refresh_interval: Duration,

    /// Timeout for each call to the remote API
    pub request_timeout: Duration,

    pub app_name: String,
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required environment variables:
    /// - BACKEND_URL: base URL of the remote job board API
    ///
    /// Optional environment variables:
    /// - BIND_ADDR (default: 127.0.0.1), PORT (default: 8080)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 10485760 = 10MB)
    /// - LOG_DIR (default: logs)
    /// - JOBS_REFRESH_SECS (default: 60)
    /// - REQUEST_TIMEOUT_SECS (default: 10)
    /// - APP_NAME (default: job-board)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .map_err(|_| "BACKEND_URL must be set in .env file or environment".to_string())?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(format!("BACKEND_URL must be an http(s) URL, got {}", backend_url));
        }

        let refresh_secs: u64 = parsed_or("JOBS_REFRESH_SECS", 60);
        if refresh_secs == 0 {
            return Err("JOBS_REFRESH_SECS must be greater than 0".to_string());
        }

        Ok(Config {
            backend_url,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed_or("PORT", 8080),
            max_payload_size: parsed_or("MAX_PAYLOAD_SIZE", 10 * 1024 * 1024),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            jobs_refresh_interval: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(parsed_or("REQUEST_TIMEOUT_SECS", 10)),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "job-board".to_string()),
        })
    }
}
