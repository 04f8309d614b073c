use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const STUDIO_DIR: &str = ".prototyper";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_DB_NAME: &str = "prototypes.db";
pub const DEFAULT_PORT: u16 = 2022;

/// Project configuration stored in `.prototyper/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    pub port: u16,
    /// Built frontend served for non-API paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// SQLite file, relative to the project root unless absolute
    pub database: PathBuf,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: "my-prototypes".to_string(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            app_dir: None,
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            database: Path::new(STUDIO_DIR).join(DEFAULT_DB_NAME),
        }
    }
}

impl StudioConfig {
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(STUDIO_DIR).join(CONFIG_FILE)
    }

    /// Read config from the project root, falling back to defaults.
    pub async fn read(project_root: &Path) -> Self {
        let config_path = Self::path(project_root);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "Config file does not exist, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&config_path).await {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!(path = %config_path.display(), "Config loaded successfully");
                    config
                }
                Err(e) => {
                    warn!(path = %config_path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "Failed to read config file, using defaults");
                Self::default()
            }
        }
    }

    pub async fn write(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_dir = project_root.join(STUDIO_DIR);
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let config_path = Self::path(project_root);
        fs::write(&config_path, content).await?;
        debug!(path = %config_path.display(), "Config saved successfully");

        Ok(())
    }

    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        if self.storage.database.is_absolute() {
            self.storage.database.clone()
        } else {
            project_root.join(&self.storage.database)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let config = StudioConfig::read(temp_dir.path()).await;
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn test_config_write_and_read() {
        let temp_dir = TempDir::new().unwrap();

        let config = StudioConfig {
            project: ProjectSection {
                name: "landing-pages".to_string(),
            },
            server: ServerSection {
                port: 8080,
                app_dir: Some(PathBuf::from("frontend/dist")),
            },
            ..Default::default()
        };
        config.write(temp_dir.path()).await.unwrap();

        let loaded = StudioConfig::read(temp_dir.path()).await;
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_config_uses_section_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(STUDIO_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "[server]\nport = 3100\n").unwrap();

        let loaded = StudioConfig::read(temp_dir.path()).await;
        assert_eq!(loaded.server.port, 3100);
        assert_eq!(loaded.storage, StorageSection::default());
    }

    #[tokio::test]
    async fn test_invalid_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(STUDIO_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "server = [").unwrap();

        let loaded = StudioConfig::read(temp_dir.path()).await;
        assert_eq!(loaded, StudioConfig::default());
    }

    #[test]
    fn test_database_path() {
        let root = Path::new("/work/idea");
        let config = StudioConfig::default();
        assert_eq!(
            config.database_path(root),
            PathBuf::from("/work/idea/.prototyper/prototypes.db")
        );

        let mut config = StudioConfig::default();
        config.storage.database = PathBuf::from("/var/lib/prototypes.db");
        assert_eq!(
            config.database_path(root),
            PathBuf::from("/var/lib/prototypes.db")
        );
    }
}
