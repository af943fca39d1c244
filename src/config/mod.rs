use crate::core::attendance::DEFAULT_TIME_FORMAT;
use crate::core::provider::{DashboardProvider, FileProvider, StaticProvider};
use crate::errors::{AppError, AppResult};
use crate::models::dashboard::DashboardData;
use crate::utils::path::expand_tilde;
use crate::utils::time::validate_time_format;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAP_URL: &str = "https://maps.google.com/maps?width=600&height=400&hl=en&q=fresh%20factory&t=&z=14&ie=UTF8&iwloc=B&output=embed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External data file (YAML or JSON); when unset the `dashboard` block is used
    pub data_file: Option<String>,
    pub time_format: String,
    pub company_name: String,
    pub map_url: String,
    pub dashboard: DashboardData,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            company_name: "Fresh Express".to_string(),
            map_url: DEFAULT_MAP_URL.to_string(),
            dashboard: DashboardData::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tmsdash")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tmsdash")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tmsdash.conf")
    }

    /// Load from the standard location
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_time_format(&self.time_format)
            .map_err(|e| AppError::Config(format!("time_format: {e}")))?;
        if self.map_url.trim().is_empty() {
            return Err(AppError::Config("map_url must not be empty".into()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Data source selected by this configuration.
    pub fn provider(&self) -> Box<dyn DashboardProvider> {
        match &self.data_file {
            Some(file) => Box::new(FileProvider::new(expand_tilde(file))),
            None => Box::new(StaticProvider::new(self.dashboard.clone())),
        }
    }

    /// Write a default configuration file at `path`.
    /// An existing file is kept unless `force` is set; returns whether a file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Self::default().to_yaml()?)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(name);
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/tmsdash.conf")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_path("tmsdash_cfg_partial.conf");
        fs::write(&path, "time_format: \"%H:%M\"\ndashboard:\n  late_trips: 9\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.time_format, "%H:%M");
        assert_eq!(cfg.dashboard.late_trips, 9);
        assert_eq!(cfg.dashboard.on_time_trips, 55);
        assert_eq!(cfg.company_name, "Fresh Express");
        fs::remove_file(path).ok();
    }

    #[test]
    fn bad_time_format_is_config_error() {
        let path = temp_path("tmsdash_cfg_badfmt.conf");
        fs::write(&path, "time_format: \"%Q\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let path = temp_path("tmsdash_cfg_broken.conf");
        fs::write(&path, "dashboard: [unclosed\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::ConfigParse(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn init_does_not_overwrite_without_force() {
        let path = temp_path("tmsdash_cfg_init.conf");
        assert!(Config::init_at(&path, false).unwrap());
        fs::write(&path, "company_name: Custom\n").unwrap();
        assert!(!Config::init_at(&path, false).unwrap());
        assert_eq!(Config::load_from(&path).unwrap().company_name, "Custom");
        assert!(Config::init_at(&path, true).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn provider_follows_data_file() {
        let cfg = Config::default();
        assert_eq!(cfg.provider().load().unwrap(), DashboardData::default());

        let cfg = Config {
            data_file: Some("/nonexistent/tmsdash/data.yml".into()),
            ..Config::default()
        };
        assert!(cfg.provider().load().is_err());
    }
}
