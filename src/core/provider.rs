//! Where dashboard numbers come from.
//! The rating engine only sees the counters; swapping the provider swaps
//! sample data for a live feed without touching it.

use crate::errors::AppResult;
use crate::models::dashboard::DashboardData;
use std::fs;
use std::path::PathBuf;

pub trait DashboardProvider {
    fn load(&self) -> AppResult<DashboardData>;
}

/// Fixed data, typically the block embedded in the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    data: DashboardData,
}

impl StaticProvider {
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }
}

impl DashboardProvider for StaticProvider {
    fn load(&self) -> AppResult<DashboardData> {
        Ok(self.data.clone())
    }
}

/// Reads a YAML data file, or JSON when the extension is `.json`.
/// Missing fields fall back to the sample values.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DashboardProvider for FileProvider {
    fn load(&self) -> AppResult<DashboardData> {
        let content = fs::read_to_string(&self.path)?;

        let is_json = self
            .path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(name);
        fs::write(&path, content).expect("write temp data file");
        path
    }

    #[test]
    fn static_provider_returns_its_data() {
        let data = DashboardData {
            on_time_trips: 3,
            ..DashboardData::default()
        };
        let loaded = StaticProvider::new(data.clone()).load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn yaml_file_with_partial_fields() {
        let path = temp_file("tmsdash_provider_partial.yml", "on_time_trips: 10\nlate_trips: 10\n");
        let data = FileProvider::new(&path).load().unwrap();
        assert_eq!(data.on_time_trips, 10);
        assert_eq!(data.late_trips, 10);
        assert_eq!(data.approved_trips, 60);
        fs::remove_file(path).ok();
    }

    #[test]
    fn json_file() {
        let path = temp_file(
            "tmsdash_provider.json",
            r#"{"user_name": "Sari", "on_time_trips": 1, "late_trips": 3}"#,
        );
        let data = FileProvider::new(&path).load().unwrap();
        assert_eq!(data.user_name, "Sari");
        assert_eq!(data.counters().rating().on_time_percent, 25);
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FileProvider::new("/nonexistent/tmsdash/data.yml").load().unwrap_err();
        assert!(matches!(err, crate::errors::AppError::Io(_)));
    }
}
