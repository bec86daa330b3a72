// File: ./src/config.rs
use crate::calendar::Calendar;
use crate::model::{ViewKind, ViewSet};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CARECAL_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub view: ViewKind,
    pub views: ViewSet,
    pub disabled: bool,
    pub events_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: ViewKind::default(),
            views: ViewSet::default(),
            disabled: false,
            events_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // Explicit override first (tests, scripts)
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "carecal", "carecal")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the user's config. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        if let Some(file) = &config.events_file {
            config.events_file = Some(expand_home(file));
        }
        Ok(config)
    }

    /// Props described by this config, without callbacks.
    pub fn calendar(&self) -> Calendar {
        Calendar::new()
            .with_view(self.view)
            .with_views(self.views.clone())
            .with_disabled(self.disabled)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(dirs) = directories::BaseDirs::new()
    {
        return dirs.home_dir().join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn reads_views_in_file_order() {
        let config = Config::parse(
            r#"
            view = "month"
            views = ["month", "day"]
            disabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.view, ViewKind::Month);
        assert_eq!(config.views, ViewSet::from([ViewKind::Month, ViewKind::Day]));
        assert!(config.disabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_unknown_views_and_keys() {
        assert!(Config::parse(r#"view = "agenda""#).is_err());
        assert!(Config::parse(r#"colour = "blue""#).is_err());
    }

    #[test]
    fn absolute_events_path_is_kept() {
        let config = Config::parse(r#"events_file = "/tmp/appointments.ics""#).unwrap();
        assert_eq!(
            config.events_file.as_deref(),
            Some(Path::new("/tmp/appointments.ics"))
        );
    }
}
