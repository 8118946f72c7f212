use std::env;

use crate::error::AppError;

/// Callback server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bind host, default loopback only: the page and the host application
    /// live on the same machine.
    pub host: String,
    pub port: u16,
    /// Directory holding the built wallet page.
    pub static_dir: String,
    /// Capacity of the host-facing address queue.
    pub queue_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BRIDGE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("BRIDGE_PORT")
            .unwrap_or_else(|_| "51345".to_string())
            .parse()
            .map_err(|_| AppError::Config("BRIDGE_PORT must be a valid port number".into()))?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "wallet-web/dist".to_string());

        let queue_capacity = env::var("QUEUE_CAPACITY")
            .unwrap_or_else(|_| "16".to_string())
            .parse()
            .map_err(|_| AppError::Config("QUEUE_CAPACITY must be a positive number".into()))?;

        let config = Self {
            host,
            port,
            static_dir,
            queue_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.host.is_empty() {
            return Err(AppError::Config("BRIDGE_HOST must not be empty".into()));
        }
        if self.queue_capacity == 0 {
            return Err(AppError::Config("QUEUE_CAPACITY must be at least 1".into()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
