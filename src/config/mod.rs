use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_recent_trips")]
    pub recent_trips: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_recent_trips() -> usize {
    5
}
fn default_currency() -> String {
    "€".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            recent_trips: default_recent_trips(),
            currency: default_currency(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtriplog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtriplog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtriplog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtriplog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or malformed file is reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!(
                    "Invalid configuration file {:?} ({}), using defaults",
                    path, e
                ));
                Self::default()
            }),
            Err(e) => {
                warning(format!(
                    "Cannot read configuration file {:?} ({}), using defaults",
                    path, e
                ));
                Self::default()
            }
        }
    }

    /// A `--db` value: absolute paths are kept, relative ones live in the
    /// config directory.
    pub fn resolve_db_path(name: &str) -> String {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path recorded in the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file().to_string_lossy().to_string(),
        };

        let config = Config {
            database: db_path,
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|e| {
                io::Error::other(format!("Failed to serialize configuration: {}", e))
            })?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
