use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Maximum upload request size in bytes
    pub max_upload_size: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding uploaded files, served under /uploads
    pub upload_dir: String,
    /// Directory holding the photos.json document
    pub data_dir: String,
    /// Bundled front-end assets
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: "./uploads".to_string(),
            data_dir: "./data".to_string(),
            public_dir: "./public".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let storage_defaults = StorageConfig::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = lookup("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let max_upload_size = lookup("MAX_UPLOAD_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(50 * 1024 * 1024); // 50MB

        let upload_dir = lookup("UPLOAD_DIR").unwrap_or(storage_defaults.upload_dir);
        let data_dir = lookup("DATA_DIR").unwrap_or(storage_defaults.data_dir);
        let public_dir = lookup("PUBLIC_DIR").unwrap_or(storage_defaults.public_dir);

        let config = Config {
            server: ServerConfig { host, port },
            storage: StorageConfig {
                upload_dir,
                data_dir,
                public_dir,
            },
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "PORT must be greater than 0".to_string(),
            ));
        }

        if self.max_upload_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_UPLOAD_SIZE must be greater than 0".to_string(),
            ));
        }

        if self.storage.upload_dir.trim().is_empty() || self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "UPLOAD_DIR and DATA_DIR cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The `host:port` pair the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
