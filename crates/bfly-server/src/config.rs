use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ServerError, ServerResult};

/// Environment variable overriding the listening port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable overriding the datastore path.
pub const DB_PATH_VAR: &str = "DB_PATH";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON document backing the API.
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            db_path: PathBuf::from("butterflies.db.json"),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML config. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read a TOML config file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Apply `PORT` and `DB_PATH` as returned by `lookup`.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> ServerResult<Self> {
        if let Some(port) = lookup(PORT_VAR) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid {PORT_VAR} value {port:?}: {e}")))?;
            info!("{PORT_VAR} set, listening on port {port}");
            self.bind_addr.set_port(port);
        }
        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.is_empty()) {
            info!("{DB_PATH_VAR} set, using datastore {path}");
            self.db_path = PathBuf::from(path);
        }
        Ok(self)
    }
}
