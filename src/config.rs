//! Configuration handling for the TUI

use crate::state::{AdmissionForm, Navigator, Route};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that points at an alternative config file
const CONFIG_PATH_ENV: &str = "ADMISSION_TUI_CONFIG";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdmissionConfig {
    /// Tab shown at startup (Home, Form, Uploads, Profile)
    pub start_route: Option<String>,
    /// Tab indicator slide duration in milliseconds
    pub tab_animation_ms: Option<u64>,
    /// Whether photo picks are allowed
    pub media_access: Option<bool>,
    /// Base directory for relative document and photo paths
    pub document_dir: Option<String>,
    /// Initial form values keyed by field (`name`, `email`, `course`, ...)
    pub prefill: Option<BTreeMap<String, String>>,
}

impl AdmissionConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("edu", "admission", "admission-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file, if the platform has one
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AdmissionConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Starting tab; unknown names fall back to Home
    pub fn start_route(&self) -> Route {
        match self.start_route.as_deref().map(str::parse::<Route>) {
            Some(Ok(route)) => route,
            Some(Err(e)) => {
                tracing::warn!("ignoring start_route: {e}");
                Route::default()
            }
            None => Route::default(),
        }
    }

    pub fn tab_animation(&self) -> Duration {
        self.tab_animation_ms
            .map(Duration::from_millis)
            .unwrap_or(Navigator::DEFAULT_ANIMATION)
    }

    /// Media access is granted unless explicitly disabled
    pub fn media_access(&self) -> bool {
        self.media_access.unwrap_or(true)
    }

    pub fn document_dir(&self) -> Option<PathBuf> {
        self.document_dir.as_ref().map(PathBuf::from)
    }

    /// Copy `prefill` into `form`, skipping unknown field names
    pub fn apply_prefill(&self, form: &mut AdmissionForm) {
        for (field, value) in self.prefill.iter().flatten() {
            if let Err(e) = form.set_field(field, value.as_str()) {
                tracing::warn!("ignoring prefill: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdmissionConfig::default();
        assert!(config.start_route.is_none());
        assert!(config.tab_animation_ms.is_none());
        assert!(config.media_access.is_none());
        assert!(config.document_dir.is_none());
        assert!(config.prefill.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = AdmissionConfig::default();
        assert_eq!(config.start_route(), Route::Home);
        assert_eq!(config.tab_animation(), Duration::from_millis(250));
        assert!(config.media_access());
        assert!(config.document_dir().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = AdmissionConfig {
            start_route: Some("Form".to_string()),
            tab_animation_ms: Some(100),
            media_access: Some(false),
            document_dir: Some("/home/jane/docs".to_string()),
            prefill: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AdmissionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.start_route(), Route::Form);
        assert_eq!(parsed.tab_animation(), Duration::from_millis(100));
        assert!(!parsed.media_access());
        assert_eq!(parsed.document_dir(), Some(PathBuf::from("/home/jane/docs")));
    }

    #[test]
    fn test_unknown_start_route_falls_back_to_home() {
        let config = AdmissionConfig {
            start_route: Some("Settings".to_string()),
            ..Default::default()
        };
        assert_eq!(config.start_route(), Route::Home);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AdmissionConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.start_route.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"media_access": false, "unknown_field": "value"}"#;
        let parsed: AdmissionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.media_access, Some(false));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"tab_animation_ms": 0}"#).unwrap();

        let config = AdmissionConfig::load_from(&path).unwrap();
        assert_eq!(config.tab_animation(), Duration::ZERO);
    }

    #[test]
    fn test_load_from_malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = AdmissionConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_prefill_sets_known_fields() {
        let json = r#"{"prefill": {"course": "BSc CS", "dob": "2006-01-31"}}"#;
        let config: AdmissionConfig = serde_json::from_str(json).unwrap();
        let mut form = AdmissionForm::new();
        config.apply_prefill(&mut form);
        assert_eq!(form.course.as_text(), "BSc CS");
        assert_eq!(form.date_of_birth.as_text(), "2006-01-31");
    }

    #[test]
    fn test_prefill_skips_unknown_fields() {
        let json = r#"{"prefill": {"age": "21", "name": "Jane Doe"}}"#;
        let config: AdmissionConfig = serde_json::from_str(json).unwrap();
        let mut form = AdmissionForm::new();
        config.apply_prefill(&mut form);
        assert_eq!(form.name.as_text(), "Jane Doe");
        assert_eq!(form.email.as_text(), "");
    }
}
