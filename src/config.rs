//! TOML configuration for default location and range settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SolunarError, SolunarResult};
use crate::types::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolunarConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub range_days: u32,
    pub best_days_limit: usize,
}

impl Default for SolunarConfig {
    fn default() -> Self {
        Self {
            latitude: -22.2758,
            longitude: 166.4580,
            range_days: 7,
            best_days_limit: 3,
        }
    }
}

impl SolunarConfig {
    pub fn from_toml_str(content: &str) -> SolunarResult<Self> {
        let config: SolunarConfig = toml::from_str(content)?;
        config.coordinate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> SolunarResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SolunarError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded solunar config");
        Ok(config)
    }

    pub fn coordinate(&self) -> SolunarResult<Coordinate> {
        Coordinate::new(self.latitude, self.longitude)
    }
}
