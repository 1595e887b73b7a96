// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_BANNERS: [&str; 3] = ["landing1", "landing2", "landing3"];
const DEFAULT_BANNER_INTERVAL: &str = "5s";
const DEFAULT_FEATURED_INTERVAL: &str = "4s";
const DEFAULT_SUBMIT_DELAY: &str = "700ms";
const DEFAULT_SUBMIT_TIMEOUT: &str = "5s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    Simulated,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub submit: Submit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage: Storage::default(),
            ui: Ui::default(),
            submit: Submit::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_banners: Option<bool>,
    pub banners: Option<Vec<String>>,
    pub banner_interval: Option<String>,
    pub featured_interval: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_banners: Some(true),
            banners: Some(DEFAULT_BANNERS.iter().map(|&s| s.to_owned()).collect()),
            banner_interval: Some(DEFAULT_BANNER_INTERVAL.to_owned()),
            featured_interval: Some(DEFAULT_FEATURED_INTERVAL.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Submit {
    pub mode: Option<String>,
    pub delay: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Submit {
    fn default() -> Self {
        Self {
            mode: Some("simulated".to_owned()),
            delay: Some(DEFAULT_SUBMIT_DELAY.to_owned()),
            base_url: None,
            timeout: Some(DEFAULT_SUBMIT_TIMEOUT.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("OPENHIRE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set OPENHIRE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(openhire_store::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [storage], [ui], and [submit]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(db_path) = &self.storage.db_path {
            openhire_store::validate_db_path(db_path)?;
        }

        for (label, raw) in [
            ("ui.banner_interval", self.ui.banner_interval.as_deref()),
            ("ui.featured_interval", self.ui.featured_interval.as_deref()),
            ("submit.delay", self.submit.delay.as_deref()),
            ("submit.timeout", self.submit.timeout.as_deref()),
        ] {
            if let Some(raw) = raw {
                let parsed = parse_duration(raw)?;
                if parsed <= Duration::ZERO {
                    bail!("{label} in {} must be positive, got {raw}", path.display());
                }
            }
        }

        let mode = self.sink_mode()?;
        if mode == SinkMode::Http && self.submit_base_url().is_none() {
            bail!(
                "submit.mode is \"http\" in {} but submit.base_url is unset",
                path.display()
            );
        }

        Ok(())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.storage.db_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => openhire_store::default_db_path(),
        }
    }

    pub fn show_banners(&self) -> bool {
        self.ui.show_banners.unwrap_or(true)
    }

    pub fn banners(&self) -> Vec<String> {
        match &self.ui.banners {
            Some(banners) if !banners.is_empty() => banners.clone(),
            _ => DEFAULT_BANNERS.iter().map(|&s| s.to_owned()).collect(),
        }
    }

    pub fn banner_interval(&self) -> Result<Duration> {
        parse_duration(
            self.ui
                .banner_interval
                .as_deref()
                .unwrap_or(DEFAULT_BANNER_INTERVAL),
        )
    }

    pub fn featured_interval(&self) -> Result<Duration> {
        parse_duration(
            self.ui
                .featured_interval
                .as_deref()
                .unwrap_or(DEFAULT_FEATURED_INTERVAL),
        )
    }

    pub fn sink_mode(&self) -> Result<SinkMode> {
        match self.submit.mode.as_deref().unwrap_or("simulated") {
            "simulated" => Ok(SinkMode::Simulated),
            "http" => Ok(SinkMode::Http),
            other => bail!("submit.mode must be \"simulated\" or \"http\", got {other:?}"),
        }
    }

    pub fn submit_delay(&self) -> Result<Duration> {
        parse_duration(self.submit.delay.as_deref().unwrap_or(DEFAULT_SUBMIT_DELAY))
    }

    pub fn submit_base_url(&self) -> Option<&str> {
        self.submit
            .base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    pub fn submit_timeout(&self) -> Result<Duration> {
        parse_duration(
            self.submit
                .timeout
                .as_deref()
                .unwrap_or(DEFAULT_SUBMIT_TIMEOUT),
        )
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# openhire config\n# Place this file at: {}\n\nversion = 1\n\n[storage]\n# Optional. Default is platform data dir (for example ~/.local/share/openhire/openhire.db)\n# db_path = \"/absolute/path/to/openhire.db\"\n\n[ui]\nshow_banners = true\nbanners = [\"landing1\", \"landing2\", \"landing3\"]\nbanner_interval = \"5s\"\nfeatured_interval = \"4s\"\n\n[submit]\n# \"simulated\" completes after `delay`; \"http\" posts to `base_url`.\nmode = \"simulated\"\ndelay = \"700ms\"\n# base_url = \"https://hire.example.com/api\"\ntimeout = \"5s\"\n",
            path.display(),
        )
    }
}

pub fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 700ms or 5s)")
}
