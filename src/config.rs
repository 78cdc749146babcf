use anyhow::Context;
use std::{env, fmt, sync::Arc};

const DEFAULT_DATABASE_URL: &str = "sqlite://cafes.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret expected in the `x-api-key` header. `None` rejects every guarded request.
    pub api_key: Option<Arc<str>>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            info!("DATABASE_URL is not set, using {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_owned()
        });

        let api_key = env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Arc::from);

        if api_key.is_none() {
            warn!("API_KEY is not set, every delete request will be rejected");
        }

        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            api_key,
            port,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_the_api_key() {
        let config = Config {
            database_url: "sqlite::memory:".to_owned(),
            api_key: Some(Arc::from("hunter2")),
            port: 3000,
        };

        let debug = format!("{config:?}");

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
