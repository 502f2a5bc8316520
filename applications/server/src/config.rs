/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file of movies loaded into the store at startup
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// `MOVIES_SERVER__HOST`, `MOVIES_SERVER__PORT` and `MOVIES_STORAGE__SEED_PATH`
    /// are read, and a plain `PORT` variable wins over `MOVIES_SERVER__PORT`.
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::var("PORT").ok())
    }

    fn load_from(port_override: Option<String>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MOVIES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port_override)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid host address: {}",
                self.server.host
            )));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must not be 0".to_string()));
        }

        if let Some(seed) = &self.storage.seed_path {
            if !seed.exists() {
                return Err(ServerError::Config(format!(
                    "Seed file not found at {:?}",
                    seed
                )));
            }
        }

        Ok(())
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: StorageSettings::default(),
        }
    }
}
