use crate::error::{MarqueeError, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted for the OMDb key when none is configured.
pub const DEFAULT_API_KEY_ENV: &str = "OMDB_API_KEY";

/// Valid plot lengths accepted by the detail endpoint.
pub const VALID_PLOT_MODES: &[&str] = &["short", "full"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the environment variable the key is read from.
    #[serde(default)]
    pub env_var: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_plot")]
    pub plot: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            env_var: None,
            timeout_secs: default_timeout_secs(),
            plot: default_plot(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// UI ticks (50ms each) a toast stays on screen.
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u8,
    #[serde(default)]
    pub live_search: bool,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            toast_ticks: default_toast_ticks(),
            live_search: false,
            debounce_ms: default_debounce_ms(),
            grid_columns: default_grid_columns(),
        }
    }
}

// -- Defaults --

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_plot() -> String {
    "short".to_string()
}
fn default_toast_ticks() -> u8 {
    100
}
fn default_debounce_ms() -> u64 {
    400
}
fn default_grid_columns() -> u16 {
    4
}

impl MarqueeConfig {
    /// Load configuration with three-layer TOML merge:
    /// 1. ~/.config/marquee/config.toml (global)
    /// 2. .marquee/config.toml (project)
    /// 3. .marquee/config.local.toml (local, untracked)
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        Self::load_with_warnings(project_dir).map(|(cfg, _)| cfg)
    }

    /// Same as [`load`](Self::load), also returning the validation warnings.
    pub fn load_with_warnings(project_dir: Option<&Path>) -> Result<(Self, Vec<String>)> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = project_dir {
            let project_config = dir.join(".marquee").join("config.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }

            let local_config = dir.join(".marquee").join("config.local.toml");
            if local_config.exists() {
                builder = builder.add_source(File::from(local_config).required(false));
            }
        }

        let config = builder
            .build()
            .map_err(|e| MarqueeError::Config(e.to_string()))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| MarqueeError::Config(e.to_string()))?;

        let warnings = cfg.validate();
        Ok((cfg, warnings))
    }

    /// Validate config values, clamping out-of-range values and logging warnings.
    /// Lenient: fixes values rather than rejecting the config.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !VALID_PLOT_MODES.contains(&self.api.plot.as_str()) {
            warnings.push(format!(
                "unknown api.plot '{}', valid: {}; using 'short'",
                self.api.plot,
                VALID_PLOT_MODES.join(", ")
            ));
            self.api.plot = default_plot();
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            warnings.push(format!(
                "api.base_url '{}' is not an http(s) URL, using default",
                self.api.base_url
            ));
            self.api.base_url = default_base_url();
        }

        if self.api.timeout_secs == 0 {
            warnings.push("api.timeout_secs = 0, setting to 1".to_string());
            self.api.timeout_secs = 1;
        }
        if self.tui.toast_ticks == 0 {
            warnings.push("tui.toast_ticks = 0, setting to 1".to_string());
            self.tui.toast_ticks = 1;
        }
        if self.tui.grid_columns == 0 {
            warnings.push("tui.grid_columns = 0, setting to 1".to_string());
            self.tui.grid_columns = 1;
        }

        for w in &warnings {
            tracing::warn!("config: {}", w);
        }

        warnings
    }
}

/// Resolve the OMDb API key.
///
/// Priority: config `api_key` → `$<env_var>` → `$OMDB_API_KEY`.
pub fn resolve_api_key(config: &ApiConfig) -> Result<String> {
    if let Some(ref key) = config.api_key {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    let mut vars = Vec::new();
    if let Some(ref var) = config.env_var {
        vars.push(var.as_str());
    }
    vars.push(DEFAULT_API_KEY_ENV);

    for var in &vars {
        if let Ok(key) = std::env::var(var) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
    }

    Err(MarqueeError::Config(format!(
        "missing OMDb API key: set [api].api_key or ${}",
        vars.join(" / $")
    )))
}

/// Mask a secret for display, keeping only the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("marquee").join("config.toml"))
}

/// Directory the TUI writes its log file into.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("marquee"))
}
