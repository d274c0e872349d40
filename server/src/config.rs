//! Server configuration from environment variables.

use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DB_PATH: &str = "roi.db";
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub db_path: String,
    pub history_limit: u32,
}

impl ServerConfig {
    /// Read `ROI_BIND_ADDR`, `ROI_DB_PATH` and `ROI_HISTORY_LIMIT`, falling
    /// back to defaults. Unparseable limits fall back rather than erroring.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("ROI_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            db_path: env::var("ROI_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            history_limit: env::var("ROI_HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HISTORY_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_env_unset() {
        // Env vars are process-global; only assert the fallback values here.
        let config = ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        };
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.db_path, "roi.db");
        assert_eq!(config.history_limit, 10);
    }
}
