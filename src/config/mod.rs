//! Configuration file support
//!
//! Optional on-disk defaults for the job configuration, loaded from
//! `segcut.toml`. Precedence is CLI > environment > file > built-in
//! defaults; the file layer only fills in values the caller did not supply.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{CutError, CutResult};

/// Paths probed when no explicit config file is given
const DEFAULT_CONFIG_PATHS: &[&str] = &["segcut.toml", "config/segcut.toml"];

/// On-disk defaults for cutting jobs
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub codec: Option<String>,
    pub audio_codec: Option<String>,
    pub quality: Option<String>,
    pub preserve_audio: Option<bool>,
    pub target_fps: Option<u32>,
}

impl AppConfig {
    /// Load from the first default location that exists, or fall back to
    /// empty defaults. A malformed file is reported and skipped rather than
    /// aborting startup.
    pub fn load() -> Self {
        for path in DEFAULT_CONFIG_PATHS {
            let path = Path::new(path);
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        info!("Loaded configuration from {}", path.display());
                        return config;
                    }
                    Err(e) => warn!("Ignoring config file {}: {}", path.display(), e),
                }
            }
        }
        Self::default()
    }

    pub fn from_file(path: &Path) -> CutResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CutError::InvalidCutSpec {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })
    }
}
