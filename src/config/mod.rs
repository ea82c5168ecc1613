use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// strftime pattern for the first record of each day
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for later records on the same day
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Ask before `--clear` wipes every record
    #[serde(default = "default_confirm_clear")]
    pub confirm_clear: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_date_format() -> String {
    "%x (%a) %I:%M %p".to_string()
}
fn default_time_format() -> String {
    "%I:%M %p".to_string()
}
fn default_confirm_clear() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            confirm_clear: default_confirm_clear(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clocker")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".clocker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clocker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clocker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg = Self::parse(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        cfg.validate()
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Reject strftime patterns chrono cannot render.
    pub fn validate(&self) -> Result<(), String> {
        for (key, fmt) in [
            ("date_format", &self.date_format),
            ("time_format", &self.time_format),
        ] {
            if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                return Err(format!("invalid {key} '{fmt}'"));
            }
        }
        Ok(())
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Write the config file (creating the directory) and make sure the
    /// database file's directory exists. `custom_db` overrides the DB path.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let mut config = Self::default();
        if let Some(name) = custom_db {
            config.database = expand_tilde(&name).to_string_lossy().to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = config.database_path().parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
