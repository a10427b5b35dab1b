use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `out_dir` from config.toml.
pub const OUT_DIR_ENV: &str = "DEVSUM_OUT_DIR";

/// How to reach the device (optional `[adb]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdbConfig {
    /// adb executable; looked up on PATH when not absolute.
    pub path: String,
    /// Device serial passed as `-s`; None lets adb pick the only attached device.
    #[serde(default)]
    pub serial: Option<String>,
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            path: "adb".to_string(),
            serial: None,
        }
    }
}

/// Global configuration loaded from `~/.config/devsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevsumConfig {
    /// Build output directory holding the host binary and the device bundle.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    /// Host checksum executable, relative to `out_dir`.
    pub host_binary: String,
    /// Directory pushed to the device when its checksum binary is missing, relative to `out_dir`.
    pub device_bundle: String,
    /// Fixed install directory on the device.
    pub device_install_dir: String,
    /// Checksum executable inside `device_install_dir`.
    pub device_binary: String,
    /// Remote exit statuses meaning "checksum binary not installed".
    pub missing_binary_exit_codes: Vec<i32>,
    #[serde(default)]
    pub adb: AdbConfig,
}

impl Default for DevsumConfig {
    fn default() -> Self {
        Self {
            out_dir: None,
            host_binary: "md5sum_bin_host".to_string(),
            device_bundle: "md5sum_dist".to_string(),
            device_install_dir: "/data/local/tmp/md5sum/".to_string(),
            device_binary: "md5sum_bin".to_string(),
            missing_binary_exit_codes: vec![2, 127],
            adb: AdbConfig::default(),
        }
    }
}

impl DevsumConfig {
    /// Apply `DEVSUM_OUT_DIR` when set and non-empty.
    pub fn apply_env(&mut self) {
        if let Some(dir) = std::env::var_os(OUT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.out_dir = Some(PathBuf::from(dir));
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("devsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The `DEVSUM_OUT_DIR` override is applied on top.
pub fn load_or_init() -> Result<DevsumConfig> {
    let mut cfg = load_or_init_at(&config_path()?)?;
    cfg.apply_env();
    Ok(cfg)
}

/// Same as `load_or_init` but for an explicit path, without env overrides.
pub fn load_or_init_at(path: &Path) -> Result<DevsumConfig> {
    if !path.exists() {
        let default_cfg = DevsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DevsumConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
