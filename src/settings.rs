use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::candidates::CandidateConfig;
use crate::context::{ContextRules, ThreadConfig};
use crate::metrics::MetricsConfig;
use crate::resources::ResourceFilterConfig;
use crate::search::SearchConfig;
use crate::titles::TitleConfig;
use crate::{log_error, log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Every tunable the engine reads. Missing fields in a settings file fall
/// back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub resources: ResourceFilterConfig,
    pub metrics: MetricsConfig,
    pub titles: TitleConfig,
    pub context: ContextRules,
    pub threads: ThreadConfig,
    pub candidates: CandidateConfig,
}

impl EngineConfig {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse engine settings")
    }
}

/// File-backed holder for an [`EngineConfig`].
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<EngineConfig>,
}

impl SettingsStore {
    /// Load settings from `path`. A missing file yields defaults; a file that
    /// does not parse yields defaults and a warning.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            EngineConfig::from_json(&contents).unwrap_or_else(|err| {
                log_warn!("{}: {err:#}; using defaults", path.display());
                EngineConfig::default()
            })
        } else {
            log_info!("no settings at {}; using defaults", path.display());
            EngineConfig::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn config(&self) -> Result<EngineConfig> {
        self.data
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| anyhow!("settings lock poisoned"))
    }

    pub fn update(&self, config: EngineConfig) -> Result<()> {
        let mut guard = self.data.write().map_err(|_| anyhow!("settings lock poisoned"))?;
        self.persist(&config)
            .inspect_err(|err| {
                log_error!("settings not saved: {err:#}");
            })?;
        *guard = config;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data = EngineConfig::from_json(&contents)
            .inspect_err(|err| {
                log_error!("{}: {err:#}; keeping current settings", self.path.display());
            })?;
        let mut guard = self.data.write().map_err(|_| anyhow!("settings lock poisoned"))?;
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &EngineConfig) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "search": { "minScore": 0.25 }, "resources": { "minSessions": 3 } }"#,
        )
        .unwrap();

        let config = SettingsStore::new(path).unwrap().config().unwrap();
        assert_eq!(config.search.min_score, 0.25);
        assert_eq!(config.resources.min_sessions, 3);
        assert_eq!(config.resources.min_visits, 2);
        assert_eq!(config.metrics.max_dwell_ms, 600_000);
        assert_eq!(config.titles.fallback_title, "Browsing session");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn update_persists_and_reload_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(path.clone()).unwrap();

        let mut config = EngineConfig::default();
        config.candidates.ready_threshold = 75;
        config.context.social.hosts.push("forum.example.com".into());
        store.update(config.clone()).unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert_eq!(reopened.config().unwrap(), config);

        reopened.reload().unwrap();
        assert_eq!(reopened.config().unwrap().candidates.ready_threshold, 75);
    }

    #[test]
    fn reload_surfaces_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(path.clone()).unwrap();
        fs::write(&path, "settings = broken").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn failed_write_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("missing").join("settings.json")).unwrap();

        let mut config = EngineConfig::default();
        config.search.min_score = 0.5;
        assert!(store.update(config).is_err());
        assert_eq!(store.config().unwrap(), EngineConfig::default());
    }
}
