//! Errors for the fallible edges of the crate: configuration loading and
//! coordinate validation. The estimators themselves never fail.

use std::path::PathBuf;

pub type SolunarResult<T> = Result<T, SolunarError>;

#[derive(Debug, thiserror::Error)]
pub enum SolunarError {
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
