//! Where the checksum binaries live, on the host and on the device.

use std::path::{Path, PathBuf};

use super::ChecksumError;
use crate::config::DevsumConfig;

/// Resolved view of the checksum-related parts of `DevsumConfig`.
///
/// Local paths are checked lazily, at the moment a calculator needs them,
/// so an empty request never fails on missing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumLayout {
    pub out_dir: Option<PathBuf>,
    pub host_binary: String,
    pub device_bundle: String,
    pub device_install_dir: String,
    pub device_binary: String,
    pub missing_binary_exit_codes: Vec<i32>,
}

impl Default for ChecksumLayout {
    fn default() -> Self {
        Self::from_config(&DevsumConfig::default())
    }
}

impl ChecksumLayout {
    pub fn from_config(cfg: &DevsumConfig) -> Self {
        Self {
            out_dir: cfg.out_dir.clone(),
            host_binary: cfg.host_binary.clone(),
            device_bundle: cfg.device_bundle.clone(),
            device_install_dir: cfg.device_install_dir.clone(),
            device_binary: cfg.device_binary.clone(),
            missing_binary_exit_codes: cfg.missing_binary_exit_codes.clone(),
        }
    }

    /// Same layout rooted at `out_dir`.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    fn out_dir(&self) -> Result<&Path, ChecksumError> {
        let dir = self.out_dir.as_deref().ok_or_else(|| {
            ChecksumError::Configuration(
                "build output directory is not configured (set out_dir or DEVSUM_OUT_DIR)"
                    .to_string(),
            )
        })?;
        if !dir.is_dir() {
            return Err(ChecksumError::Configuration(format!(
                "build output directory {} does not exist",
                dir.display()
            )));
        }
        Ok(dir)
    }

    /// Host checksum executable inside the output directory.
    pub fn host_binary_path(&self) -> Result<PathBuf, ChecksumError> {
        let path = self.out_dir()?.join(&self.host_binary);
        if !path.is_file() {
            return Err(ChecksumError::Configuration(format!(
                "host checksum binary {} not found; build it first",
                path.display()
            )));
        }
        Ok(path)
    }

    /// Local directory pushed to the device when its binary is missing.
    pub fn device_bundle_path(&self) -> Result<PathBuf, ChecksumError> {
        let path = self.out_dir()?.join(&self.device_bundle);
        if !path.is_dir() {
            return Err(ChecksumError::Configuration(format!(
                "device checksum bundle {} not found; build it first",
                path.display()
            )));
        }
        Ok(path)
    }

    /// Install directory on the device, always with a trailing slash.
    pub fn device_install_dir(&self) -> String {
        if self.device_install_dir.ends_with('/') {
            self.device_install_dir.clone()
        } else {
            format!("{}/", self.device_install_dir)
        }
    }

    /// Absolute path of the checksum binary on the device.
    pub fn device_binary_path(&self) -> String {
        format!("{}{}", self.device_install_dir(), self.device_binary)
    }
}
