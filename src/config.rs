use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration, loaded once before the listener starts and never
/// reloaded. Shared read-only across all connection handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_document_root() -> PathBuf {
    PathBuf::from("./StaticFiles")
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("./Logs")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            document_root: default_document_root(),
            log_directory: default_log_directory(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the YAML file named by `STATICO_CONFIG`,
    /// falling back to `statico.yaml` in the working directory, falling back
    /// to built-in defaults when no file exists. A file that exists but does
    /// not parse is an error; a missing file is not.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("STATICO_CONFIG").unwrap_or_else(|_| "statico.yaml".to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_yaml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Bind address for the listener: all interfaces on the configured port.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
