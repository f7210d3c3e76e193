use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download from {url} failed: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Band error: {0}")]
    Band(#[from] specmap_core::SpecmapError),

    #[error("invalid region {0:?}: must be non-empty and must not contain '_'")]
    InvalidRegion(String),

    #[error("no spectrum map files exist in {}", .0.display())]
    NoDownloads(PathBuf),

    #[error("file named {0} does not exist")]
    FileNotFound(String),

    #[error("no cached band table at {}", .0.display())]
    CachedTableMissing(PathBuf),
}

impl DatasetError {
    /// True when a required file is simply not there yet.
    pub fn is_resource_absence(&self) -> bool {
        matches!(
            self,
            Self::NoDownloads(_) | Self::FileNotFound(_) | Self::CachedTableMissing(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
