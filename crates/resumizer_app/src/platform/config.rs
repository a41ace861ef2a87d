use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use resumizer_engine::ClientSettings;
use resumizer_logging::LogDestination;
use serde::Deserialize;

const CONFIG_FILENAME: &str = "resumizer.ron";
pub(crate) const SERVER_URL_ENV: &str = "RESUMIZER_SERVER_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutput {
    /// Keeps the prompt free of log lines.
    #[default]
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server_url: String,
    pub download_dir: PathBuf,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_download_bytes: u64,
    pub log_output: LogOutput,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            server_url: client.base_url,
            download_dir: client.download_dir,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_download_bytes: client.max_download_bytes,
            log_output: LogOutput::default(),
            log_file: PathBuf::from("resumizer.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(SERVER_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.server_url = url.trim().to_string();
        }
        self
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.server_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_download_bytes: self.max_download_bytes,
            download_dir: self.download_dir.clone(),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log_output {
            LogOutput::File => LogDestination::File(self.log_file.clone()),
            LogOutput::Terminal => LogDestination::Terminal,
            LogOutput::Both => LogDestination::Both(self.log_file.clone()),
        }
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

/// Config file named on the command line, or `resumizer.ron` in the working directory.
pub(crate) fn config_path(arg: Option<OsString>) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Reads the config file. A missing file is `Ok(None)`.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read config from {:?}", path))
        }
    };

    let config = ron::from_str(&content)
        .with_context(|| format!("Failed to parse config from {:?}", path))?;
    Ok(Some(config))
}
