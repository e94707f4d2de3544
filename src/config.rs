use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub api: ApiConfig,
  #[serde(default)]
  pub cache: CacheConfig,
  /// Rows per page for list views
  #[serde(default = "default_page_size")]
  pub page_size: u32,
  /// Write logs to a daily-rolling file in this directory instead of stderr
  pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Base URL of the REST backend, e.g. https://admin.example.com/api
  pub base_url: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl ApiConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      timeout_secs: default_timeout_secs(),
    }
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
  /// Lifetime of cached reads. Unset means cached until a mutation invalidates them.
  pub ttl_secs: Option<u64>,
}

impl CacheConfig {
  pub fn ttl(&self) -> Option<Duration> {
    self.ttl_secs.map(Duration::from_secs)
  }
}

fn default_page_size() -> u32 {
  10
}

fn default_timeout_secs() -> u64 {
  30
}

impl Config {
  /// Build a config for a backend URL with every other setting defaulted.
  pub fn for_base_url(base_url: impl Into<String>) -> Self {
    Self {
      api: ApiConfig::new(base_url),
      cache: CacheConfig::default(),
      page_size: default_page_size(),
      log_dir: None,
    }
  }

  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./sportadmin.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/sportadmin/config.yaml
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => Err(eyre!(
        "No configuration file found. Create one at ~/.config/sportadmin/config.yaml \
         or pass --base-url."
      )),
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("sportadmin.yaml");
    if local.exists() {
      return Some(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("sportadmin").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    Self::parse(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
  }

  pub fn parse(contents: &str) -> Result<Self> {
    let config: Config = serde_yaml::from_str(contents)?;
    if config.page_size == 0 {
      return Err(eyre!("page_size must be at least 1"));
    }
    Ok(config)
  }

  /// Get the API token from the environment, if one is set.
  ///
  /// The token never lives in the config file.
  pub fn get_api_token() -> Option<String> {
    std::env::var("SPORTADMIN_API_TOKEN")
      .ok()
      .filter(|t| !t.trim().is_empty())
  }
}
