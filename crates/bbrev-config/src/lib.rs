//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bitbucket Cloud options.
    pub cloud: ApiCloudConfig,
}

#[derive(Debug, Clone)]
pub struct ApiCloudConfig {
    /// Bitbucket API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Bitbucket API root URL.
    pub root_url: String,
    /// Bitbucket username.
    pub username: String,
    /// Bitbucket app password.
    pub app_password: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Reconciler configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                cloud: ApiCloudConfig {
                    connect_timeout: env_to_u64("BBREV_API_CLOUD_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BBREV_API_CLOUD_ROOT_URL", "https://api.bitbucket.org"),
                    username: env_to_str("BBREV_API_CLOUD_USERNAME", ""),
                    app_password: env_to_str("BBREV_API_CLOUD_APP_PASSWORD", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BBREV_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
